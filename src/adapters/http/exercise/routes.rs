//! HTTP routes for exercise catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{exercise_solution, list_exercises, ExerciseHandlers};

/// Creates the exercise router with all endpoints.
pub fn exercise_routes(handlers: ExerciseHandlers) -> Router {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercise-solution/:code", get(exercise_solution))
        .with_state(handlers)
}
