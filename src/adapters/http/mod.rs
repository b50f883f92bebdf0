//! HTTP adapters - REST API implementations.

pub mod conversation;
pub mod exercise;

pub use conversation::{conversation_routes, ConversationHandlers};
pub use exercise::{exercise_routes, ExerciseHandlers};

use axum::Router;

/// Assembles the full `/api` router.
pub fn api_router(
    exercise_handlers: ExerciseHandlers,
    conversation_handlers: ConversationHandlers,
) -> Router {
    let api = exercise_routes(exercise_handlers).merge(conversation_routes(conversation_handlers));
    Router::new().nest("/api", api)
}
