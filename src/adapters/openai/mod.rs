//! OpenAI adapters.

mod assistants;

pub use assistants::{OpenAiAssistantGateway, OpenAiGatewayConfig};
