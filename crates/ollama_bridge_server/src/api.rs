//! HTTP routes for the bridge.

use crate::BridgeConfig;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use ollama_bridge_core::{BridgeResponse, IncomingRequest, UpstreamPayload};
use ollama_bridge_error::{BridgeError, BridgeResult};
use ollama_bridge_ollama::{OllamaClient, REQUEST_TIMEOUT};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{debug, info, instrument};

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct BridgeState {
    /// Startup configuration
    pub config: Arc<BridgeConfig>,
    /// Upstream client
    pub client: OllamaClient,
}

impl BridgeState {
    /// Creates handler state from the startup configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the upstream client cannot be built.
    pub fn new(config: BridgeConfig) -> BridgeResult<Self> {
        let client = OllamaClient::new(config.ollama_url().clone())?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

/// Creates the bridge router.
///
/// API routes are registered before the static file fallback, so they win
/// over files with the same name.
pub fn create_router(state: BridgeState) -> Router {
    let static_files = ServeDir::new(state.config.static_dir());

    Router::new()
        .route("/api/ollama", post(forward_to_ollama))
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Liveness probe.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Relay a prompt or chat conversation to Ollama.
///
/// Body rejections are taken as a value so they surface as JSON `detail`
/// errors like every other failure.
#[instrument(skip_all, fields(model = tracing::field::Empty))]
async fn forward_to_ollama(
    State(state): State<BridgeState>,
    body: Result<Json<IncomingRequest>, JsonRejection>,
) -> Result<Json<BridgeResponse>, BridgeError> {
    let Json(req) = body?;
    tracing::Span::current().record("model", req.model().as_str());
    debug!(
        temperature = ?req.temperature(),
        "Temperature is accepted but not forwarded"
    );

    let payload = UpstreamPayload::from_request(&req)?;
    let result = state.client.generate(&payload, REQUEST_TIMEOUT).await?;

    info!(
        text_len = result.text().map(str::len),
        "Relayed Ollama response"
    );
    Ok(Json(BridgeResponse::success(result)))
}
