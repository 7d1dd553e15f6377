//! Dashboard server binary

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dashboard_agent::QueryEngine;
use dashboard_config::load_settings;
use dashboard_llm::{GeminiBackend, LlmBackend};
use dashboard_server::{create_router, AppState, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings(std::env::var("DASHBOARD_CONFIG").ok().as_deref())
        .map_err(|e| ServerError::Config(e.to_string()))?;

    let engine = match GeminiBackend::new(settings.llm.clone()) {
        Ok(backend) if backend.is_configured() => {
            tracing::info!(model = backend.model_name(), "hosted model configured");
            QueryEngine::new(Arc::new(backend))
        }
        Ok(_) => {
            tracing::info!("no LLM credential, running deterministic resolver only");
            QueryEngine::deterministic()
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client creation failed, running deterministic resolver only");
            QueryEngine::deterministic()
        }
    };

    let state = AppState::new(engine, settings.server.cors_origins.clone());
    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Bind(format!("{}: {}", addr, e)))?;

    tracing::info!(%addr, "dashboard server listening");
    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Bind(e.to_string()))?;

    Ok(())
}
