//! Payload forwarded to the Ollama generate endpoint.

use crate::{ChatMessage, IncomingRequest, MISSING_INPUT_MESSAGE, enhance_prompt};
use derive_getters::Getters;
use ollama_bridge_error::{BridgeError, BridgeErrorKind, BridgeResult};
use serde::Serialize;
use tracing::{debug, instrument};

/// Body of the outbound `POST` to Ollama.
///
/// Exactly one of `prompt` and `messages` is populated; absent fields are
/// omitted from the serialized JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct UpstreamPayload {
    /// Ollama model name
    model: String,
    /// Enhanced prompt (prompt mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
    /// Conversation forwarded verbatim (messages mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<Vec<ChatMessage>>,
    /// Token limit, only when the caller supplied a non-zero value
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<i64>,
}

impl UpstreamPayload {
    /// Build the upstream payload for an inbound request.
    ///
    /// A non-empty messages list takes precedence and is forwarded untouched;
    /// otherwise the prompt is wrapped in the instructional template.
    ///
    /// # Errors
    ///
    /// Returns a bad-request error when the request has neither a prompt nor
    /// any messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use ollama_bridge_core::{IncomingRequest, UpstreamPayload};
    ///
    /// let req: IncomingRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
    /// let payload = UpstreamPayload::from_request(&req).unwrap();
    /// assert!(payload.prompt().as_deref().unwrap().contains("User question: hi"));
    /// assert!(payload.messages().is_none());
    /// ```
    #[instrument(skip(req), fields(model = %req.model()))]
    pub fn from_request(req: &IncomingRequest) -> BridgeResult<Self> {
        let max_tokens = req.max_tokens().filter(|n| *n != 0);

        if let Some(messages) = req.non_empty_messages() {
            debug!(message_count = messages.len(), "Forwarding chat messages");
            return Ok(Self {
                model: req.model().clone(),
                prompt: None,
                messages: Some(messages.to_vec()),
                max_tokens,
            });
        }

        let prompt = req.non_empty_prompt().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::BadRequest(
                MISSING_INPUT_MESSAGE.to_string(),
            ))
        })?;

        debug!(prompt_len = prompt.len(), "Wrapping prompt in template");
        Ok(Self {
            model: req.model().clone(),
            prompt: Some(enhance_prompt(prompt)),
            messages: None,
            max_tokens,
        })
    }
}
