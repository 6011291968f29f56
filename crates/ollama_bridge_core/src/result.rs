//! Normalized results returned to the caller.

use serde::Serialize;
use serde_json::Value;

/// Outcome of normalizing an Ollama response body.
///
/// Serialized untagged, so callers see either the aggregated object, a bare
/// `{"text": ...}` object, or whatever JSON document Ollama produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedResult {
    /// Multi-line (NDJSON) body reassembled into one answer
    Aggregated {
        /// Concatenated `response`/`text` fragments in line order
        text: String,
        /// Every non-empty trimmed line of the body
        raw_lines: Vec<String>,
        /// Final successfully parsed line
        #[serde(skip_serializing_if = "Option::is_none")]
        last: Option<Value>,
    },
    /// Body that could not be parsed as JSON
    RawText {
        /// The body exactly as received
        text: String,
    },
    /// Single JSON document, passed through unchanged
    Passthrough(Value),
}

impl NormalizedResult {
    /// Generated text, when the result shape exposes one directly.
    ///
    /// Pass-through documents report their `response` field, which is where
    /// non-streaming Ollama replies put the answer.
    pub fn text(&self) -> Option<&str> {
        match self {
            NormalizedResult::Aggregated { text, .. } => Some(text.as_str()),
            NormalizedResult::RawText { text } => Some(text.as_str()),
            NormalizedResult::Passthrough(value) => value.get("response").and_then(Value::as_str),
        }
    }
}

/// Success envelope for `POST /api/ollama`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeResponse {
    /// Always `true` for successful responses
    pub ok: bool,
    /// Normalized upstream result
    pub result: NormalizedResult,
}

impl BridgeResponse {
    /// Wrap a normalized result in the success envelope.
    pub fn success(result: NormalizedResult) -> Self {
        Self { ok: true, result }
    }
}
