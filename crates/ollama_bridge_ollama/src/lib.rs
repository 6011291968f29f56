//! Ollama integration for the bridge.
//!
//! [`OllamaClient`] performs the single outbound call per request and
//! [`normalize`] turns whatever body Ollama returned into one
//! [`NormalizedResult`](ollama_bridge_core::NormalizedResult).

mod client;
mod normalize;

pub use client::{DEFAULT_OLLAMA_URL, OllamaClient, REQUEST_TIMEOUT};
pub use normalize::normalize;
