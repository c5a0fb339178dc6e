//! HTTP client for the Gemini `generateContent` endpoint.

use reqwest::Client as HttpClient;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::extract::{ResponseShapeError, extract_generated_text};
use super::types::GenerateRequest;

/// Connection settings for the generate endpoint, injected at construction.
///
/// There is no ambient state: the credential, endpoint URL, and everything
/// else the client needs arrives through this struct.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, passed as the `key` query parameter.
    pub api_key: String,
    /// Full endpoint URL, without the key.
    pub api_url: String,
}

impl GeminiConfig {
    /// Default endpoint for the fixed model.
    pub const DEFAULT_URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent";

    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }
}

/// Errors from a generate call, split by where the failure happened.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The HTTP request itself failed (connect, DNS, body read).
    #[error("generate request failed")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("generate endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be navigated to its text payload.
    #[error(transparent)]
    Shape(#[from] ResponseShapeError),
}

/// Client for the generate endpoint. Cheap to clone; the inner HTTP client
/// is shared.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: HttpClient,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: HttpClient::new(),
            config,
        }
    }

    /// Send `prompt` as a single user-role message and return the generated
    /// text. The call is awaited for its full duration; there is no retry,
    /// no circuit breaker, and no timeout beyond the HTTP client defaults.
    ///
    /// An empty string means the endpoint answered successfully but produced
    /// no candidates or parts; callers treat that as "no tasks", not an
    /// error.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = GenerateRequest::user_prompt(prompt);
        let url = format!("{}?key={}", self.config.api_url, self.config.api_key);

        debug!(prompt_chars = prompt.len(), "sending generate request");

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: Value =
            serde_json::from_str(&body).map_err(ResponseShapeError::InvalidJson)?;

        let text = extract_generated_text(&envelope)?;
        debug!(generated_chars = text.len(), "generate request succeeded");
        Ok(text)
    }
}
