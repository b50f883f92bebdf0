//! Sessions and their identifiers.
//!
//! A session binds a locally generated conversation identifier to the remote
//! handles provisioned for one exercise run: a thread for the message history
//! and an assistant configured with the exercise's expert persona. Sessions
//! are created once, read on every turn, and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::exercise::ExerciseDefinition;

/// Length of the random suffix appended to conversation identifiers.
const CONVERSATION_ID_SUFFIX_CHARS: usize = 9;

/// Locally generated identifier for a conversation.
///
/// Opaque to callers. Generated as a millisecond timestamp plus a short
/// random suffix; uniqueness within one process lifetime is all that is
/// required, so no cryptographic guarantees are made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    /// Generates a fresh conversation identifier.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(CONVERSATION_ID_SUFFIX_CHARS)
            .collect();
        Self(format!("{}_{}", millis, suffix))
    }

    /// Wraps an identifier received from a caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for a remote expert assistant, issued by the assistants service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssistantId(String);

impl AssistantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssistantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for a remote conversation thread, issued by the assistants service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for one asynchronous run on a thread, issued by the assistants
/// service when a turn is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-side record for one exercise conversation.
///
/// The assistant handle is exclusive to this session's persona instructions;
/// it is never shared across sessions or exercises.
#[derive(Debug, Clone)]
pub struct Session {
    pub conversation_id: ConversationId,
    pub thread_id: ThreadId,
    pub assistant_id: AssistantId,
    pub exercise_code: String,
    pub exercise: ExerciseDefinition,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session record for freshly provisioned remote handles.
    pub fn new(
        conversation_id: ConversationId,
        thread_id: ThreadId,
        assistant_id: AssistantId,
        exercise_code: impl Into<String>,
        exercise: ExerciseDefinition,
    ) -> Self {
        Self {
            conversation_id,
            thread_id,
            assistant_id,
            exercise_code: exercise_code.into(),
            exercise,
            created_at: Utc::now(),
        }
    }
}
