//! HTTP server for the Ollama bridge.
//!
//! Exposes `POST /api/ollama`, `GET /health`, and static files from the
//! configured directory for everything else.

mod api;
mod config;

pub use api::{BridgeState, create_router};
pub use config::{BridgeConfig, BridgeConfigBuilder, DEFAULT_HOST, DEFAULT_PORT};
