//! HTTP endpoints
//!
//! REST API for the dashboard: metrics snapshot, bulk record/target
//! replacement, and the chat endpoint.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use dashboard_core::{DashboardContext, StoreTarget, TransactionRecord};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/metrics", get(get_metrics))
        .route("/api/records", put(put_records))
        .route("/api/targets", put(put_targets))
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build the CORS layer from configured origins; empty defaults to
/// localhost for safety
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let value = origin.parse::<HeaderValue>().ok();
            if value.is_none() {
                tracing::warn!(origin, "invalid CORS origin ignored");
            }
            value
        })
        .collect();

    if parsed.is_empty() {
        tracing::info!("no CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Current aggregated snapshot
async fn get_metrics(State(state): State<AppState>) -> Json<DashboardContext> {
    Json(state.context())
}

#[derive(Debug, Serialize)]
struct ReplaceResponse {
    count: usize,
}

/// Bulk replace of normalized records (ingestion boundary)
async fn put_records(
    State(state): State<AppState>,
    Json(records): Json<Vec<TransactionRecord>>,
) -> (StatusCode, Json<ReplaceResponse>) {
    let count = state.replace_records(records);
    (StatusCode::OK, Json(ReplaceResponse { count }))
}

/// Replace the explicit monthly targets
async fn put_targets(
    State(state): State<AppState>,
    Json(targets): Json<Vec<StoreTarget>>,
) -> (StatusCode, Json<ReplaceResponse>) {
    let count = state.replace_targets(targets);
    (StatusCode::OK, Json(ReplaceResponse { count }))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
}

/// Answer a free-text question about the current snapshot
///
/// The context is captured before the await so concurrent replacements
/// cannot mutate a resolution in flight.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let context = state.context();
    let reply = state.engine.answer(&request.message, &context).await;
    Json(ChatResponse { reply })
}
