//! HTTP DTOs for exercise catalog endpoints.

use serde::Serialize;

use crate::domain::{ExerciseDefinition, ExerciseSummary};

/// One entry in the exercise listing.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseListItem {
    pub code: String,
    pub title: String,
    pub description: String,
}

impl From<ExerciseSummary> for ExerciseListItem {
    fn from(summary: ExerciseSummary) -> Self {
        Self {
            code: summary.code,
            title: summary.title,
            description: summary.description,
        }
    }
}

/// Reference solution for one exercise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionResponse {
    pub reference_solution: String,
    pub bpmn_diagram: String,
}

impl From<&ExerciseDefinition> for SolutionResponse {
    fn from(definition: &ExerciseDefinition) -> Self {
        Self {
            reference_solution: definition.reference_solution.clone(),
            bpmn_diagram: definition.bpmn_diagram.clone(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpertPersona;

    #[test]
    fn solution_response_serializes_camel_case() {
        let definition = ExerciseDefinition {
            title: "t".to_string(),
            description: "d".to_string(),
            reference_solution: "the solution".to_string(),
            bpmn_diagram: "<bpmn/>".to_string(),
            learning_objectives: vec![],
            expert_persona: ExpertPersona {
                role: "r".to_string(),
                experience: "e".to_string(),
                style: "s".to_string(),
            },
        };

        let json = serde_json::to_value(SolutionResponse::from(&definition)).unwrap();
        assert_eq!(json["referenceSolution"], "the solution");
        assert_eq!(json["bpmnDiagram"], "<bpmn/>");
    }

    #[test]
    fn error_response_has_terse_shape() {
        let json = serde_json::to_string(&ErrorResponse::new("Exercise not found")).unwrap();
        assert_eq!(json, r#"{"error":"Exercise not found"}"#);
    }
}
