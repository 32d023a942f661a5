//! Text-to-image inference client.
//!
//! [`ImageGenerator`] is the seam the image tool depends on; the
//! production implementation talks to a Hugging Face style inference
//! endpoint over HTTPS.

use async_trait::async_trait;
use kiosk_config::InferenceConfig;
use kiosk_types::DiagnosticError;
use thiserror::Error;
use tracing::debug;

/// Longest error-body excerpt kept in an error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors from the inference service.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The access token environment variable is unset or blank.
    #[error("access token missing: environment variable {var} is not set")]
    MissingToken { var: String },
    /// The HTTP client could not be built or the request did not complete.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl DiagnosticError for InferenceError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::MissingToken { .. } => {
                Some("Image generation needs an inference access token.".into())
            }
            Self::Request(_) => Some("The inference service could not be reached.".into()),
            Self::Status { status, .. } if *status == 401 || *status == 403 => {
                Some("The inference service rejected the access token.".into())
            }
            Self::Status { status, .. } if *status == 503 => {
                Some("The model is loading or overloaded.".into())
            }
            Self::Status { .. } => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::MissingToken { var } => Some(format!("export {var}=<your token>")),
            Self::Status { status: 503, .. } => Some("Retry in a few seconds.".into()),
            _ => None,
        }
    }
}

/// Produces image bytes from a text prompt.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image for `prompt` and returns the encoded bytes.
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, InferenceError>;
}

/// Inference client for a `POST {base_url}/{model}` text-to-image endpoint.
#[derive(Debug, Clone)]
pub struct HfInferenceClient {
    http: reqwest::Client,
    endpoint: String,
    token_env: String,
}

impl HfInferenceClient {
    /// Creates a client from configuration.
    ///
    /// The token is not read here; it is looked up on every call so a
    /// missing token only fails the image tool.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("kiosk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
            token_env: config.token_env.clone(),
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn token(&self) -> Result<String, InferenceError> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| InferenceError::MissingToken {
                var: self.token_env.clone(),
            })
    }
}

#[async_trait]
impl ImageGenerator for HfInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, InferenceError> {
        let token = self.token()?;
        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "requesting image");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "image/png")
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!(len = bytes.len(), "image received");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token_env: &str) -> InferenceConfig {
        InferenceConfig {
            base_url: "http://127.0.0.1:9/models".into(),
            model: "test/model".into(),
            token_env: token_env.into(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn endpoint_comes_from_config() {
        let client = HfInferenceClient::new(&config("KIOSK_TEST_UNUSED")).expect("client");
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/models/test/model");
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let client =
            HfInferenceClient::new(&config("KIOSK_TEST_TOKEN_THAT_IS_NEVER_SET")).expect("client");
        let err = client.generate("a cat").await.expect_err("no token");
        assert!(matches!(err, InferenceError::MissingToken { .. }));
        assert!(err.fix().expect("fix").contains("KIOSK_TEST_TOKEN_THAT_IS_NEVER_SET"));
    }

    #[test]
    fn auth_status_has_hint() {
        let e = InferenceError::Status {
            status: 401,
            body: "unauthorized".into(),
        };
        assert!(e.hint().expect("hint").contains("token"));
        assert!(e.fix().is_none());
    }

    #[test]
    fn overloaded_status_suggests_retry() {
        let e = InferenceError::Status {
            status: 503,
            body: "loading".into(),
        };
        assert_eq!(e.fix().as_deref(), Some("Retry in a few seconds."));
    }
}
