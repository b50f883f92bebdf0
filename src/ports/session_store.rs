//! Session store port.
//!
//! The registry behind the conversation identifiers. Deliberately narrow
//! (insert and lookup only) so the in-memory map can later be swapped for a
//! persistent store without touching the workflow logic. Sessions are never
//! updated or deleted; they live for the process lifetime.

use async_trait::async_trait;

use crate::domain::{ConversationId, Session};

/// Port for session registration and lookup.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Register a newly created session.
    ///
    /// Conversation identifiers are generated fresh per session, so an
    /// insert never observes a duplicate key.
    async fn insert(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Look up a session by conversation identifier.
    ///
    /// Returns `None` if no session was registered under the identifier.
    async fn get(&self, id: &ConversationId) -> Result<Option<Session>, SessionStoreError>;
}

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// The backing store could not be reached or failed.
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
