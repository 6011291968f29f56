//! HTTP client for the Ollama generate endpoint.

use crate::normalize;
use ollama_bridge_core::{NormalizedResult, UpstreamPayload};
use ollama_bridge_error::{BridgeError, BridgeErrorKind, BridgeResult};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Generate endpoint of a default local Ollama install.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";

/// Upper bound on a single upstream call, including reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a locally running Ollama service.
///
/// Idle connections are not kept between calls, so every request opens a
/// fresh connection to the upstream service.
///
/// # Examples
///
/// ```
/// use ollama_bridge_ollama::{DEFAULT_OLLAMA_URL, OllamaClient};
///
/// let client = OllamaClient::new(DEFAULT_OLLAMA_URL).unwrap();
/// assert_eq!(client.url(), "http://localhost:11434/api/generate");
/// ```
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    url: String,
}

impl OllamaClient {
    /// Creates a client that posts to `url`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> BridgeResult<Self> {
        let url = url.into();
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| {
                BridgeError::new(BridgeErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!(url = %url, "Created Ollama client");

        Ok(Self { client, url })
    }

    /// Returns the upstream URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `payload` to Ollama and normalizes the response body.
    ///
    /// # Errors
    ///
    /// - service-unavailable when the connection is refused
    /// - bad-gateway for any other transport error, including `timeout`
    /// - bad-gateway when Ollama answers with a non-success status
    #[instrument(skip(self, payload), fields(url = %self.url, model = %payload.model()))]
    pub async fn generate(
        &self,
        payload: &UpstreamPayload,
        timeout: Duration,
    ) -> BridgeResult<NormalizedResult> {
        debug!(timeout_secs = timeout.as_secs(), "Sending request to Ollama");

        let response = self
            .client
            .post(&self.url)
            .timeout(timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Ollama returned an error status");
            let detail = serde_json::from_str::<Value>(&body)
                .unwrap_or_else(|_| json!({ "status_code": status.as_u16(), "text": body }));
            return Err(BridgeError::new(BridgeErrorKind::UpstreamStatus {
                status: status.as_u16(),
                detail,
            }));
        }

        debug!(status = %status, body_len = body.len(), "Received Ollama response");
        Ok(normalize(&body))
    }

    #[track_caller]
    fn transport_error(&self, err: reqwest::Error) -> BridgeError {
        if err.is_connect() && !err.is_timeout() {
            warn!(error = ?err, "Ollama is unreachable");
            BridgeError::new(BridgeErrorKind::UpstreamUnavailable(self.url.clone()))
        } else {
            error!(error = ?err, "Ollama request failed");
            BridgeError::new(BridgeErrorKind::UpstreamTransport(err.to_string()))
        }
    }
}
