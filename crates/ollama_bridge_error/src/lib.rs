//! Error types for the Ollama bridge.
//!
//! Every failure the bridge can surface to an HTTP caller is a [`BridgeError`],
//! discriminated by [`BridgeErrorKind`] and tagged with the source location
//! where it was raised.

mod bridge;
#[cfg(feature = "axum")]
mod response;

pub use bridge::{BridgeError, BridgeErrorKind};

/// Result type for bridge operations.
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
