//! BPM-LEIA server binary.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bpm_leia::adapters::catalog::load_catalog;
use bpm_leia::adapters::http::{api_router, ConversationHandlers, ExerciseHandlers};
use bpm_leia::adapters::openai::{OpenAiAssistantGateway, OpenAiGatewayConfig};
use bpm_leia::adapters::session::InMemorySessionStore;
use bpm_leia::application::handlers::{SendMessageHandler, StartExerciseHandler};
use bpm_leia::config::{AppConfig, ValidationError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let catalog = Arc::new(load_catalog(&config.exercises.catalog_path)?);

    let api_key = config
        .assistant
        .openai_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;

    let gateway = Arc::new(OpenAiAssistantGateway::new(
        OpenAiGatewayConfig::new(api_key)
            .with_base_url(config.assistant.base_url.clone())
            .with_timeout(config.assistant.timeout()),
    ));
    let store = Arc::new(InMemorySessionStore::new());

    let start_handler = Arc::new(StartExerciseHandler::new(
        catalog.clone(),
        gateway.clone(),
        store.clone(),
        config.assistant.model.clone(),
        config.assistant.temperature,
    ));
    let send_handler = Arc::new(SendMessageHandler::new(
        store,
        gateway,
        config.assistant.poll_interval(),
    ));

    let cors = cors_layer(&config.server.cors_origins_list())?;

    let app = api_router(
        ExerciseHandlers::new(catalog),
        ConversationHandlers::new(start_handler, send_handler),
    )
    .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "BPM-LEIA server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer. Without configured origins any origin is allowed,
/// which suits local development.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}
