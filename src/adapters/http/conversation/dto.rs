//! HTTP DTOs for conversation endpoints.
//!
//! These types decouple the public JSON contract (camelCase fields) from the
//! application layer's types.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ExerciseOverview, SendMessageResult, StartExerciseResult};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start an exercise.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartExerciseRequest {
    pub exercise_code: String,
}

/// Request for one conversational turn.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub conversation_id: String,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a started exercise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedExerciseResponse {
    pub conversation_id: String,
    pub exercise: ExercisePayload,
}

/// Public exercise view embedded in the start response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePayload {
    pub code: String,
    pub title: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
}

impl From<StartExerciseResult> for StartedExerciseResponse {
    fn from(result: StartExerciseResult) -> Self {
        let ExerciseOverview {
            code,
            title,
            description,
            learning_objectives,
        } = result.exercise;

        Self {
            conversation_id: result.conversation_id.to_string(),
            exercise: ExercisePayload {
                code,
                title,
                description,
                learning_objectives,
            },
        }
    }
}

/// Response for a completed turn.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub response: String,
    pub status: String,
}

impl From<SendMessageResult> for SendMessageResponse {
    fn from(result: SendMessageResult) -> Self {
        Self {
            response: result.response,
            status: "success".to_string(),
        }
    }
}

/// Standard error response.
///
/// Terse by design: callers get a short message, and run failures
/// additionally carry the observed terminal status.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: Some(status.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConversationId;

    #[test]
    fn start_exercise_request_deserializes_camel_case() {
        let json = r#"{"exerciseCode": "EX01"}"#;
        let req: StartExerciseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.exercise_code, "EX01");
    }

    #[test]
    fn send_message_request_deserializes_camel_case() {
        let json = r#"{"conversationId": "1700_abc", "message": "hello"}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.conversation_id, "1700_abc");
        assert_eq!(req.message, "hello");
    }

    #[test]
    fn started_exercise_response_serializes_camel_case() {
        let result = StartExerciseResult {
            conversation_id: ConversationId::new("1700_abc"),
            exercise: ExerciseOverview {
                code: "EX01".to_string(),
                title: "Order Fulfillment".to_string(),
                description: "d".to_string(),
                learning_objectives: vec!["one".to_string()],
            },
        };

        let json = serde_json::to_value(StartedExerciseResponse::from(result)).unwrap();
        assert_eq!(json["conversationId"], "1700_abc");
        assert_eq!(json["exercise"]["code"], "EX01");
        assert_eq!(json["exercise"]["learningObjectives"][0], "one");
        assert!(json["exercise"].get("referenceSolution").is_none());
    }

    #[test]
    fn send_message_response_reports_success() {
        let response = SendMessageResponse::from(SendMessageResult {
            response: "Well, first we check inventory...".to_string(),
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["response"], "Well, first we check inventory...");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn error_response_omits_absent_status() {
        let json = serde_json::to_string(&ErrorResponse::new("Conversation not found")).unwrap();
        assert_eq!(json, r#"{"error":"Conversation not found"}"#);
    }

    #[test]
    fn error_response_carries_run_status() {
        let json =
            serde_json::to_value(ErrorResponse::with_status("Assistant run failed", "failed"))
                .unwrap();
        assert_eq!(json["error"], "Assistant run failed");
        assert_eq!(json["status"], "failed");
    }
}
