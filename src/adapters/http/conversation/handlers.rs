//! HTTP handlers for conversation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    SendMessageCommand, SendMessageHandler, StartExerciseCommand, StartExerciseHandler,
};
use crate::application::ConversationError;
use crate::domain::ConversationId;

use super::dto::{
    ErrorResponse, SendMessageRequest, SendMessageResponse, StartExerciseRequest,
    StartedExerciseResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationHandlers {
    start_handler: Arc<StartExerciseHandler>,
    send_handler: Arc<SendMessageHandler>,
}

impl ConversationHandlers {
    pub fn new(
        start_handler: Arc<StartExerciseHandler>,
        send_handler: Arc<SendMessageHandler>,
    ) -> Self {
        Self {
            start_handler,
            send_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/start-exercise - Create a session for an exercise
pub async fn start_exercise(
    State(handlers): State<ConversationHandlers>,
    Json(req): Json<StartExerciseRequest>,
) -> Response {
    let cmd = StartExerciseCommand {
        exercise_code: req.exercise_code,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response: StartedExerciseResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_start_error(e),
    }
}

/// POST /api/send-message - Execute one conversational turn
pub async fn send_message(
    State(handlers): State<ConversationHandlers>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let cmd = SendMessageCommand {
        conversation_id: ConversationId::new(req.conversation_id),
        message: req.message,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => {
            let response: SendMessageResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_send_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_start_error(error: ConversationError) -> Response {
    match error {
        ConversationError::ExerciseNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Exercise not found")),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "failed to start exercise");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to start exercise")),
            )
                .into_response()
        }
    }
}

fn handle_send_error(error: ConversationError) -> Response {
    match error {
        ConversationError::ConversationNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Conversation not found")),
        )
            .into_response(),
        ConversationError::RunNotCompleted(status) => {
            tracing::error!(status = %status, "assistant run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_status(
                    "Assistant run failed",
                    status.as_str(),
                )),
            )
                .into_response()
        }
        other => {
            tracing::error!(error = %other, "failed to send message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to send message")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RunId;
    use crate::ports::{GatewayError, RunStatus};

    #[test]
    fn exercise_not_found_maps_to_404() {
        let response = handle_start_error(ConversationError::ExerciseNotFound("EX99".to_string()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn provisioning_failure_maps_to_500() {
        let response =
            handle_start_error(ConversationError::Gateway(GatewayError::api(500, "boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conversation_not_found_maps_to_404() {
        let response = handle_send_error(ConversationError::ConversationNotFound(
            ConversationId::new("missing"),
        ));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn run_not_completed_maps_to_500() {
        let response = handle_send_error(ConversationError::RunNotCompleted(RunStatus::Failed));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_reply_maps_to_500() {
        let response = handle_send_error(ConversationError::ReplyNotFound(RunId::new("run_1")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
