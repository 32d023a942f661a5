//! Configuration schema types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level kiosk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KioskConfig {
    /// Server identity.
    #[serde(default)]
    pub server: ServerConfig,
    /// Image inference service settings.
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server identity reported by `initialize` and the server-info resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Server name.
    #[serde(default = "default_server_name")]
    pub name: String,
    /// One-line description.
    #[serde(default = "default_description")]
    pub description: String,
    /// URI the server-info resource is published at.
    #[serde(default = "default_resource_uri")]
    pub resource_uri: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            description: default_description(),
            resource_uri: default_resource_uri(),
        }
    }
}

fn default_server_name() -> String {
    "kiosk".to_string()
}
fn default_description() -> String {
    "MCP server with greeting, calculator, clock and image generation tools".to_string()
}
fn default_resource_uri() -> String {
    "server://info".to_string()
}

/// Text-to-image inference service settings.
///
/// The access token is never stored here; only the name of the
/// environment variable it is read from at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Base URL the model id is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model id.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the access token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl InferenceConfig {
    /// Returns the timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full endpoint URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://router.huggingface.co/hf-inference/models".to_string()
}
fn default_model() -> String {
    "black-forest-labs/FLUX.1-schnell".to_string()
}
fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}
fn default_timeout_secs() -> u64 {
    60
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "kiosk_mcp=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
