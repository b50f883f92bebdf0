//! SendMessageHandler - executes one conversational turn.
//!
//! A turn appends the learner's utterance to the session's thread, submits a
//! run bound to the session's assistant, polls the run to a terminal status,
//! and extracts the assistant's reply. Polling is unbounded with a fixed
//! interval: a run that never terminates keeps the request open.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::application::error::ConversationError;
use crate::domain::ConversationId;
use crate::ports::{AssistantGateway, MessageRole, RunStatus, SessionStore};

/// Command for one conversational turn.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub conversation_id: ConversationId,
    /// Learner utterance. Unconstrained; may be empty.
    pub message: String,
}

/// Result of a completed turn.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub response: String,
}

/// Handler for conversational turns.
pub struct SendMessageHandler {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn AssistantGateway>,
    poll_interval: Duration,
}

impl SendMessageHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        gateway: Arc<dyn AssistantGateway>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            store,
            gateway,
            poll_interval,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, ConversationError> {
        // 1. Resolve the session before contacting the remote service.
        let session = self
            .store
            .get(&cmd.conversation_id)
            .await?
            .ok_or_else(|| ConversationError::ConversationNotFound(cmd.conversation_id.clone()))?;

        // 2. Append the learner's utterance to the thread.
        self.gateway
            .append_message(&session.thread_id, MessageRole::User, &cmd.message)
            .await?;

        // 3. Submit the run.
        let run = self
            .gateway
            .create_run(&session.thread_id, &session.assistant_id)
            .await?;

        tracing::debug!(
            conversation_id = %cmd.conversation_id,
            run_id = %run.id,
            "run submitted"
        );

        // 4. Poll until the run reaches a terminal status. The sleep is the
        // only suspension point; concurrent requests keep making progress.
        let mut status = run.status;
        while status.is_pending() {
            sleep(self.poll_interval).await;
            status = self.gateway.run_status(&session.thread_id, &run.id).await?;
        }

        if status != RunStatus::Completed {
            tracing::warn!(
                conversation_id = %cmd.conversation_id,
                run_id = %run.id,
                status = %status,
                "run ended without completing"
            );
            return Err(ConversationError::RunNotCompleted(status));
        }

        // 5. Listings are newest first, so the first match is the most
        // recent reply attributed to this run.
        let messages = self.gateway.list_messages(&session.thread_id).await?;
        let reply = messages
            .into_iter()
            .find(|m| m.role == MessageRole::Assistant && m.run_id.as_ref() == Some(&run.id))
            .ok_or_else(|| ConversationError::ReplyNotFound(run.id.clone()))?;

        Ok(SendMessageResult {
            response: reply.text,
        })
    }
}
