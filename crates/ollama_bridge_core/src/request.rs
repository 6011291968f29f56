//! Inbound request types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "gemma3:270m";

/// Token limit used when the caller omits `max_tokens`.
pub const DEFAULT_MAX_TOKENS: i64 = 512;

/// Sampling temperature used when the caller omits `temperature`.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> Option<i64> {
    Some(DEFAULT_MAX_TOKENS)
}

fn default_temperature() -> Option<f32> {
    Some(DEFAULT_TEMPERATURE)
}

/// A chat message forwarded verbatim to Ollama.
///
/// Fields other than `role` and `content` (for example `images`) are kept
/// in `extra` so nothing the caller sent is lost on the way upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    role: String,
    /// Message content
    content: String,
    /// Any additional fields supplied by the caller
    #[serde(flatten)]
    #[builder(default)]
    extra: Map<String, Value>,
}

impl ChatMessage {
    /// Create a message with the given role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }

    /// Returns a builder for constructing a ChatMessage.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

/// Request body accepted by `POST /api/ollama`.
///
/// Either `prompt` or `messages` must be non-empty. `temperature` is accepted
/// for compatibility with existing front-ends but is not forwarded upstream.
///
/// # Examples
///
/// ```
/// use ollama_bridge_core::IncomingRequest;
///
/// let req: IncomingRequest = serde_json::from_str(r#"{"prompt": "Hello"}"#).unwrap();
/// assert_eq!(req.model(), "gemma3:270m");
/// assert_eq!(*req.max_tokens(), Some(512));
/// assert!(req.has_input());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct IncomingRequest {
    /// Free-form user question
    #[serde(default)]
    #[builder(default)]
    prompt: Option<String>,
    /// Ollama model name
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    #[builder(default = "default_max_tokens()")]
    max_tokens: Option<i64>,
    /// Sampling temperature (accepted, never forwarded)
    #[serde(default = "default_temperature")]
    #[builder(default = "default_temperature()")]
    temperature: Option<f32>,
    /// Chat-style conversation, forwarded instead of the prompt when present
    #[serde(default)]
    #[builder(default)]
    messages: Option<Vec<ChatMessage>>,
}

impl IncomingRequest {
    /// Returns a builder for constructing an IncomingRequest.
    pub fn builder() -> IncomingRequestBuilder {
        IncomingRequestBuilder::default()
    }

    /// The prompt, if one was supplied and is non-empty.
    pub fn non_empty_prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }

    /// The messages list, if one was supplied and is non-empty.
    pub fn non_empty_messages(&self) -> Option<&[ChatMessage]> {
        self.messages.as_deref().filter(|m| !m.is_empty())
    }

    /// Whether the request carries something to send upstream.
    pub fn has_input(&self) -> bool {
        self.non_empty_prompt().is_some() || self.non_empty_messages().is_some()
    }
}
