//! HTTP adapter for conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, SendMessageRequest, SendMessageResponse, StartExerciseRequest,
    StartedExerciseResponse,
};
pub use handlers::ConversationHandlers;
pub use routes::conversation_routes;
