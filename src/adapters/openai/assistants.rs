//! OpenAI Assistants Gateway - implementation of AssistantGateway for the
//! Assistants v2 API.
//!
//! Assistants, threads, messages and runs map one-to-one onto the port's
//! operations. Runs are asynchronous on the remote side; callers poll
//! `run_status` until a terminal status is observed.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiGatewayConfig::new(api_key)
//!     .with_base_url("https://api.openai.com/v1")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let gateway = OpenAiAssistantGateway::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{AssistantId, RunId, ThreadId};
use crate::ports::{
    AssistantGateway, CreateAssistantRequest, GatewayError, MessageRole, Run, RunStatus,
    ThreadMessage,
};

/// Configuration for the OpenAI assistants gateway.
#[derive(Debug, Clone)]
pub struct OpenAiGatewayConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiGatewayConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Assistants v2 API gateway implementation.
pub struct OpenAiAssistantGateway {
    config: OpenAiGatewayConfig,
    client: Client,
}

impl OpenAiAssistantGateway {
    /// Creates a new gateway with the given configuration.
    pub fn new(config: OpenAiGatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Applies authentication and API-version headers.
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .header("OpenAI-Beta", "assistants=v2")
    }

    /// Sends a request, mapping transport failures.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self.with_headers(builder).send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    timeout_secs: self.config.timeout.as_secs() as u32,
                }
            } else if e.is_connect() {
                GatewayError::network(format!("Connection failed: {}", e))
            } else {
                GatewayError::network(e.to_string())
            }
        })?;

        self.check_status(response).await
    }

    /// Maps non-success statuses onto the gateway error taxonomy.
    async fn check_status(&self, response: Response) -> Result<Response, GatewayError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(GatewayError::AuthenticationFailed),
            429 => Err(GatewayError::RateLimited),
            code => Err(GatewayError::api(code, parse_error_message(&error_body))),
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, GatewayError> {
        response
            .json()
            .await
            .map_err(|e| GatewayError::parse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl AssistantGateway for OpenAiAssistantGateway {
    async fn create_assistant(
        &self,
        request: CreateAssistantRequest,
    ) -> Result<AssistantId, GatewayError> {
        let body = CreateAssistantBody {
            name: &request.name,
            instructions: &request.instructions,
            model: &request.model,
            temperature: request.temperature,
        };

        let response = self
            .send(self.client.post(self.url("/assistants")).json(&body))
            .await?;
        let assistant: AssistantObject = Self::parse_json(response).await?;

        tracing::debug!(assistant_id = %assistant.id, "assistant provisioned");
        Ok(AssistantId::new(assistant.id))
    }

    async fn create_thread(&self) -> Result<ThreadId, GatewayError> {
        let response = self
            .send(
                self.client
                    .post(self.url("/threads"))
                    .json(&serde_json::json!({})),
            )
            .await?;
        let thread: ThreadObject = Self::parse_json(response).await?;

        tracing::debug!(thread_id = %thread.id, "thread provisioned");
        Ok(ThreadId::new(thread.id))
    }

    async fn append_message(
        &self,
        thread: &ThreadId,
        role: MessageRole,
        text: &str,
    ) -> Result<(), GatewayError> {
        let body = CreateMessageBody {
            role: role_to_wire(role),
            content: text,
        };

        self.send(
            self.client
                .post(self.url(&format!("/threads/{}/messages", thread.as_str())))
                .json(&body),
        )
        .await?;

        Ok(())
    }

    async fn create_run(
        &self,
        thread: &ThreadId,
        assistant: &AssistantId,
    ) -> Result<Run, GatewayError> {
        let body = CreateRunBody {
            assistant_id: assistant.as_str(),
        };

        let response = self
            .send(
                self.client
                    .post(self.url(&format!("/threads/{}/runs", thread.as_str())))
                    .json(&body),
            )
            .await?;
        let run: RunObject = Self::parse_json(response).await?;

        Ok(Run {
            id: RunId::new(run.id),
            status: RunStatus::from_remote(&run.status),
        })
    }

    async fn run_status(&self, thread: &ThreadId, run: &RunId) -> Result<RunStatus, GatewayError> {
        let response = self
            .send(self.client.get(self.url(&format!(
                "/threads/{}/runs/{}",
                thread.as_str(),
                run.as_str()
            ))))
            .await?;
        let run: RunObject = Self::parse_json(response).await?;

        Ok(RunStatus::from_remote(&run.status))
    }

    async fn list_messages(&self, thread: &ThreadId) -> Result<Vec<ThreadMessage>, GatewayError> {
        let response = self
            .send(
                self.client
                    .get(self.url(&format!("/threads/{}/messages", thread.as_str()))),
            )
            .await?;
        let listing: MessageListObject = Self::parse_json(response).await?;

        // The API lists messages newest first; the port relies on that order.
        Ok(listing
            .data
            .into_iter()
            .filter_map(message_from_wire)
            .collect())
    }
}

/// Extracts a human-readable message from an API error body.
fn parse_error_message(error_body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
        if let Some(message) = parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    error_body.to_string()
}

fn role_to_wire(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

/// Converts a wire message to the port type.
///
/// Messages with roles the port does not model are dropped. The text is the
/// first text content block; messages without one yield empty text.
fn message_from_wire(message: MessageObject) -> Option<ThreadMessage> {
    let role = match message.role.as_str() {
        "user" => MessageRole::User,
        "assistant" => MessageRole::Assistant,
        _ => return None,
    };

    let text = message
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .map(|block| block.value)
        .unwrap_or_default();

    Some(ThreadMessage {
        role,
        run_id: message.run_id.map(RunId::new),
        text,
    })
}

// ----- Assistants API wire types -----

#[derive(Debug, Serialize)]
struct CreateAssistantBody<'a> {
    name: &'a str,
    instructions: &'a str,
    model: &'a str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct AssistantObject {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ThreadObject {
    id: String,
}

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateRunBody<'a> {
    assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct RunObject {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct MessageListObject {
    data: Vec<MessageObject>,
}

#[derive(Debug, Deserialize)]
struct MessageObject {
    role: String,
    run_id: Option<String>,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<TextBlock>,
}

#[derive(Debug, Deserialize)]
struct TextBlock {
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenAiGatewayConfig::new("test-key")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn url_builds_from_base() {
        let gateway = OpenAiAssistantGateway::new(
            OpenAiGatewayConfig::new("k").with_base_url("https://api.test/v1"),
        );
        assert_eq!(
            gateway.url("/threads/thread_1/runs"),
            "https://api.test/v1/threads/thread_1/runs"
        );
    }

    #[test]
    fn parse_error_message_from_structured_body() {
        let body = r#"{"error":{"message":"Invalid model","type":"invalid_request_error"}}"#;
        assert_eq!(parse_error_message(body), "Invalid model");
    }

    #[test]
    fn parse_error_message_falls_back_to_raw_body() {
        assert_eq!(parse_error_message("plain failure"), "plain failure");
    }

    #[test]
    fn wire_message_converts_first_text_block() {
        let json = r#"{
            "role": "assistant",
            "run_id": "run_1",
            "content": [
                {"type": "image_file", "text": null},
                {"type": "text", "text": {"value": "Well, first we check inventory..."}}
            ]
        }"#;
        let wire: MessageObject = serde_json::from_str(json).unwrap();
        let message = message_from_wire(wire).unwrap();

        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.run_id, Some(RunId::new("run_1")));
        assert_eq!(message.text, "Well, first we check inventory...");
    }

    #[test]
    fn wire_message_without_text_block_yields_empty_text() {
        let json = r#"{"role": "user", "run_id": null, "content": []}"#;
        let wire: MessageObject = serde_json::from_str(json).unwrap();
        let message = message_from_wire(wire).unwrap();

        assert_eq!(message.role, MessageRole::User);
        assert!(message.run_id.is_none());
        assert_eq!(message.text, "");
    }

    #[test]
    fn wire_message_with_unmodeled_role_is_dropped() {
        let json = r#"{"role": "system", "run_id": null, "content": []}"#;
        let wire: MessageObject = serde_json::from_str(json).unwrap();
        assert!(message_from_wire(wire).is_none());
    }

    #[test]
    fn run_object_maps_to_run_status() {
        let json = r#"{"id": "run_1", "status": "in_progress"}"#;
        let wire: RunObject = serde_json::from_str(json).unwrap();
        assert_eq!(RunStatus::from_remote(&wire.status), RunStatus::Running);
    }
}
