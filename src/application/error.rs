//! Error taxonomy for the conversation use cases.

use crate::domain::{ConversationId, RunId};
use crate::ports::{GatewayError, RunStatus, SessionStoreError};

/// Failures of the start-exercise and send-message use cases.
///
/// The not-found variants are caller errors; everything else reports a
/// failure of the remote assistants service or the session store.
#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    /// No exercise definition exists for the requested code.
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(String),

    /// No session was registered under the conversation identifier.
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    /// The remote assistants service failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The session store failed.
    #[error(transparent)]
    Store(#[from] SessionStoreError),

    /// The run reached a terminal status other than completed.
    #[error("run ended with status {0}")]
    RunNotCompleted(RunStatus),

    /// The run completed but no attributed assistant reply was found.
    #[error("no assistant reply found for run {0}")]
    ReplyNotFound(RunId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_not_completed_carries_the_observed_status() {
        let err = ConversationError::RunNotCompleted(RunStatus::Failed);
        assert_eq!(err.to_string(), "run ended with status failed");
    }

    #[test]
    fn gateway_errors_convert_transparently() {
        let err: ConversationError = GatewayError::network("connection reset").into();
        assert_eq!(err.to_string(), "network error: connection reset");
    }
}
