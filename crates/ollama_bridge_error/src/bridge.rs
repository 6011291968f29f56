//! Bridge error types.

use serde_json::{Value, json};

/// Kinds of bridge errors.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum BridgeErrorKind {
    /// Neither a prompt nor a messages list was supplied
    #[display("{}", _0)]
    BadRequest(String),
    /// Request body missing, not JSON, or not the expected shape
    #[display("{}", message)]
    InvalidBody {
        /// Client error status chosen by the body extractor
        status: u16,
        /// Why the body was rejected
        message: String,
    },
    /// The upstream service refused or dropped the connection
    #[display("Cannot connect to Ollama at {}. Is Ollama running?", _0)]
    UpstreamUnavailable(String),
    /// Any other transport failure (DNS, timeout, malformed request)
    #[display("Ollama request error: {}", _0)]
    UpstreamTransport(String),
    /// The upstream service answered with a non-success status
    #[display("Ollama responded with status {}: {}", status, detail)]
    UpstreamStatus {
        /// HTTP status code returned by the upstream service
        status: u16,
        /// Response body, parsed as JSON when possible
        detail: Value,
    },
    /// Invalid runtime configuration
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

impl BridgeErrorKind {
    /// HTTP status code surfaced to the caller for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            BridgeErrorKind::BadRequest(_) => 400,
            BridgeErrorKind::InvalidBody { status, .. } => *status,
            BridgeErrorKind::UpstreamUnavailable(_) => 503,
            BridgeErrorKind::UpstreamTransport(_) => 502,
            BridgeErrorKind::UpstreamStatus { .. } => 502,
            BridgeErrorKind::Configuration(_) => 500,
        }
    }

    /// Human-readable detail payload surfaced to the caller.
    ///
    /// Upstream status failures carry the upstream body under
    /// `ollama_response`; every other kind is a plain string.
    pub fn detail(&self) -> Value {
        match self {
            BridgeErrorKind::UpstreamStatus { detail, .. } => {
                json!({ "ollama_response": detail })
            }
            other => Value::String(other.to_string()),
        }
    }
}

/// Bridge error with location tracking.
///
/// # Examples
///
/// ```
/// use ollama_bridge_error::{BridgeError, BridgeErrorKind};
///
/// let err = BridgeError::new(BridgeErrorKind::UpstreamUnavailable(
///     "http://localhost:11434/api/generate".to_string(),
/// ));
/// assert_eq!(err.status_code(), 503);
/// assert!(format!("{}", err).contains("localhost:11434"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Bridge Error: {} at line {} in {}", kind, line, file)]
pub struct BridgeError {
    /// The kind of error that occurred
    pub kind: BridgeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BridgeError {
    /// Create a new bridge error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BridgeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status code surfaced to the caller.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Detail payload surfaced to the caller.
    pub fn detail(&self) -> Value {
        self.kind.detail()
    }
}

impl From<BridgeErrorKind> for BridgeError {
    #[track_caller]
    fn from(kind: BridgeErrorKind) -> Self {
        Self::new(kind)
    }
}
