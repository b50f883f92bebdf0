//! HTTP handlers for exercise catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::ExerciseCatalog;

use super::dto::{ErrorResponse, ExerciseListItem, SolutionResponse};

#[derive(Clone)]
pub struct ExerciseHandlers {
    catalog: Arc<ExerciseCatalog>,
}

impl ExerciseHandlers {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self { catalog }
    }
}

/// GET /api/exercises - List available exercises
pub async fn list_exercises(State(handlers): State<ExerciseHandlers>) -> Response {
    let items: Vec<ExerciseListItem> = handlers
        .catalog
        .summaries()
        .into_iter()
        .map(Into::into)
        .collect();

    (StatusCode::OK, Json(items)).into_response()
}

/// GET /api/exercise-solution/:code - Reveal the reference solution
pub async fn exercise_solution(
    State(handlers): State<ExerciseHandlers>,
    Path(code): Path<String>,
) -> Response {
    match handlers.catalog.get(&code) {
        Some(definition) => {
            (StatusCode::OK, Json(SolutionResponse::from(definition))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Exercise not found")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExerciseDefinition, ExpertPersona};
    use std::collections::HashMap;

    fn handlers() -> ExerciseHandlers {
        let mut map = HashMap::new();
        map.insert(
            "EX01".to_string(),
            ExerciseDefinition {
                title: "Order Fulfillment".to_string(),
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
        );
        ExerciseHandlers::new(Arc::new(ExerciseCatalog::from_definitions(map)))
    }

    #[tokio::test]
    async fn list_exercises_returns_ok() {
        let response = list_exercises(State(handlers())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn known_solution_returns_ok() {
        let response = exercise_solution(State(handlers()), Path("EX01".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_solution_returns_404() {
        let response = exercise_solution(State(handlers()), Path("EX99".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
