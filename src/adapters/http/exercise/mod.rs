//! HTTP adapter for exercise catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, ExerciseListItem, SolutionResponse};
pub use handlers::ExerciseHandlers;
pub use routes::exercise_routes;
