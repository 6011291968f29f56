//! Runtime configuration for the bridge server

use derive_getters::Getters;
use ollama_bridge_ollama::DEFAULT_OLLAMA_URL;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Immutable configuration, built once at startup and shared with handlers.
///
/// # Examples
///
/// ```
/// use ollama_bridge_server::BridgeConfig;
///
/// let config = BridgeConfig::builder().port(3000u16).build().unwrap();
/// assert_eq!(config.ollama_url(), "http://localhost:11434/api/generate");
/// assert_eq!(config.bind_addr(), "127.0.0.1:3000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BridgeConfig {
    /// Ollama generate endpoint
    #[builder(default = "DEFAULT_OLLAMA_URL.to_string()")]
    ollama_url: String,
    /// Interface to listen on
    #[builder(default = "DEFAULT_HOST.to_string()")]
    host: String,
    /// Port to listen on
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
    /// Directory served for non-API paths
    #[builder(default = "PathBuf::from(\".\")")]
    static_dir: PathBuf,
}

impl BridgeConfig {
    /// Returns a builder for constructing a BridgeConfig.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("."),
        }
    }
}

impl BridgeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(url) = &self.ollama_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!(
                    "Ollama URL must start with http:// or https://, got '{}'",
                    url
                ));
            }
        }
        if self.host.as_ref().is_some_and(|h| h.trim().is_empty()) {
            return Err("Host must not be empty".to_string());
        }
        Ok(())
    }
}
