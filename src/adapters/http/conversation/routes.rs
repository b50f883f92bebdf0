//! HTTP routes for conversation endpoints.

use axum::{routing::post, Router};

use super::handlers::{send_message, start_exercise, ConversationHandlers};

/// Creates the conversation router with all endpoints.
pub fn conversation_routes(handlers: ConversationHandlers) -> Router {
    Router::new()
        .route("/start-exercise", post(start_exercise))
        .route("/send-message", post(send_message))
        .with_state(handlers)
}
