//! Core data types for the Ollama bridge.
//!
//! This crate holds the request-scoped values that flow through the bridge:
//! the inbound request, the payload forwarded to Ollama, the normalized
//! result returned to the caller, and the static prompt template.

mod observability;
mod payload;
mod prompt;
mod request;
mod result;

pub use observability::init_tracing;
pub use payload::UpstreamPayload;
pub use prompt::{MISSING_INPUT_MESSAGE, WEBSITE_CONTEXT, enhance_prompt};
pub use request::{
    ChatMessage, ChatMessageBuilder, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    IncomingRequest, IncomingRequestBuilder,
};
pub use result::{BridgeResponse, NormalizedResult};
