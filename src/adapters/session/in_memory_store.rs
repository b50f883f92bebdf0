//! In-memory session store implementation.
//!
//! Backs the session registry with a mutex-guarded map. Suitable for a
//! single-server deployment; sessions are lost on process restart. For a
//! deployment that must survive restarts, implement `SessionStore` against a
//! database and swap it in at wiring time.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{ConversationId, Session};
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory implementation of the `SessionStore` port.
///
/// Thread-safe via an internal `Mutex`; both operations are simple
/// key-value accesses with no multi-key semantics.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<ConversationId, Session>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Returns true if no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.conversation_id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &ConversationId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssistantId, ExerciseDefinition, ExpertPersona, ThreadId};

    fn test_session(conversation_id: ConversationId) -> Session {
        Session::new(
            conversation_id,
            ThreadId::new("thread_1"),
            AssistantId::new("asst_1"),
            "EX01",
            ExerciseDefinition {
                title: "t".to_string(),
                description: "d".to_string(),
                reference_solution: "s".to_string(),
                bpmn_diagram: "<bpmn/>".to_string(),
                learning_objectives: vec![],
                expert_persona: ExpertPersona {
                    role: "r".to_string(),
                    experience: "e".to_string(),
                    style: "s".to_string(),
                },
            },
        )
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = InMemorySessionStore::new();
        let id = ConversationId::generate();

        store.insert(test_session(id.clone())).await.unwrap();

        let found = store.get(&id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().exercise_code, "EX01");
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = InMemorySessionStore::new();
        let found = store.get(&ConversationId::new("missing")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated_by_id() {
        let store = InMemorySessionStore::new();
        let first = ConversationId::generate();
        let second = ConversationId::generate();

        store.insert(test_session(first.clone())).await.unwrap();
        store.insert(test_session(second.clone())).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get(&first).await.unwrap().unwrap().conversation_id,
            first
        );
        assert_eq!(
            store.get(&second).await.unwrap().unwrap().conversation_id,
            second
        );
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_registered() {
        let store = std::sync::Arc::new(InMemorySessionStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(test_session(ConversationId::generate())).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len(), 16);
    }
}
