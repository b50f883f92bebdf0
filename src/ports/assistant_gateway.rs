//! Assistant Gateway Port - interface to the remote assistants service.
//!
//! The remote service owns all conversational intelligence: it hosts
//! persona-configured assistants, per-conversation threads, and asynchronous
//! runs that progress from submission to a terminal status. This port keeps
//! the application core decoupled from the concrete API so tests can script
//! the remote behavior.
//!
//! # Design
//!
//! - All handles are opaque strings issued by the remote service
//! - Run progress is modeled as an explicit state machine ([`RunStatus`])
//! - Message listings are newest-first; callers rely on that ordering when
//!   locating the reply for a specific run

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{AssistantId, RunId, ThreadId};

/// Port for the remote assistants service.
///
/// Implementations translate between these operations and the provider's
/// REST API; mocks script the remote behavior for tests.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Provision an assistant configured with persona instructions.
    async fn create_assistant(
        &self,
        request: CreateAssistantRequest,
    ) -> Result<AssistantId, GatewayError>;

    /// Provision an empty conversation thread.
    async fn create_thread(&self) -> Result<ThreadId, GatewayError>;

    /// Append a message to a thread without starting a run.
    async fn append_message(
        &self,
        thread: &ThreadId,
        role: MessageRole,
        text: &str,
    ) -> Result<(), GatewayError>;

    /// Submit a run on a thread, bound to an assistant.
    ///
    /// Returns the run handle together with its initial status.
    async fn create_run(
        &self,
        thread: &ThreadId,
        assistant: &AssistantId,
    ) -> Result<Run, GatewayError>;

    /// Fetch the current status of a run.
    async fn run_status(&self, thread: &ThreadId, run: &RunId) -> Result<RunStatus, GatewayError>;

    /// List a thread's messages, newest first.
    async fn list_messages(&self, thread: &ThreadId) -> Result<Vec<ThreadMessage>, GatewayError>;
}

/// Request to provision an expert assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAssistantRequest {
    /// Display name for the assistant.
    pub name: String,
    /// Persona instructions the assistant must follow.
    pub instructions: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl CreateAssistantRequest {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: model.into(),
            temperature,
        }
    }
}

/// Role of a thread message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Learner input.
    User,
    /// Expert assistant response.
    Assistant,
}

/// One asynchronous run, as returned on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub id: RunId,
    pub status: RunStatus,
}

/// State machine for a run's lifecycle.
///
/// A run starts queued or running and eventually reaches exactly one
/// terminal state. `Other` captures terminal statuses this backend has no
/// special handling for (the remote service may add new ones at any time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
    Expired,
    Other(String),
}

impl RunStatus {
    /// Maps a remote status string onto the state machine.
    pub fn from_remote(status: &str) -> Self {
        match status {
            "queued" => RunStatus::Queued,
            "running" | "in_progress" => RunStatus::Running,
            "completed" => RunStatus::Completed,
            "failed" => RunStatus::Failed,
            "cancelled" => RunStatus::Cancelled,
            "expired" => RunStatus::Expired,
            other => RunStatus::Other(other.to_string()),
        }
    }

    /// True while the run has not reached a terminal state.
    pub fn is_pending(&self) -> bool {
        matches!(self, RunStatus::Queued | RunStatus::Running)
    }

    /// True once the run has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Stable string form, used on error surfaces.
    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Expired => "expired",
            RunStatus::Other(status) => status,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message from a thread listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadMessage {
    /// Who authored the message.
    pub role: MessageRole,
    /// Run that produced the message, when the remote service attributes one.
    pub run_id: Option<RunId>,
    /// Text of the message's first text content block.
    pub text: String,
}

/// Assistants service errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the remote service.
    #[error("rate limited by assistants service")]
    RateLimited,

    /// The remote service rejected the request or failed internally.
    #[error("assistants service error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error details from the response body.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl GatewayError {
    /// Creates an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn assistant_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn AssistantGateway) {}
    }

    #[test]
    fn run_status_maps_remote_strings() {
        assert_eq!(RunStatus::from_remote("queued"), RunStatus::Queued);
        assert_eq!(RunStatus::from_remote("running"), RunStatus::Running);
        assert_eq!(RunStatus::from_remote("in_progress"), RunStatus::Running);
        assert_eq!(RunStatus::from_remote("completed"), RunStatus::Completed);
        assert_eq!(RunStatus::from_remote("failed"), RunStatus::Failed);
        assert_eq!(RunStatus::from_remote("cancelled"), RunStatus::Cancelled);
        assert_eq!(RunStatus::from_remote("expired"), RunStatus::Expired);
        assert_eq!(
            RunStatus::from_remote("requires_action"),
            RunStatus::Other("requires_action".to_string())
        );
    }

    #[test]
    fn pending_and_terminal_partition_the_states() {
        assert!(RunStatus::Queued.is_pending());
        assert!(RunStatus::Running.is_pending());

        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert!(RunStatus::Cancelled.is_terminal());
        assert!(RunStatus::Expired.is_terminal());
        assert!(RunStatus::Other("incomplete".to_string()).is_terminal());
    }

    #[test]
    fn run_status_display_matches_remote_vocabulary() {
        assert_eq!(RunStatus::Failed.to_string(), "failed");
        assert_eq!(RunStatus::Running.to_string(), "running");
        assert_eq!(
            RunStatus::Other("requires_action".to_string()).to_string(),
            "requires_action"
        );
    }

    #[test]
    fn message_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::User).unwrap();
        assert_eq!(json, "\"user\"");

        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn gateway_error_displays_status() {
        let err = GatewayError::api(500, "boom");
        assert_eq!(
            err.to_string(),
            "assistants service error (status 500): boom"
        );
    }
}
