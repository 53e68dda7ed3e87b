//! Gemini `generateContent` client
//!
//! Submits one free-text prompt and relays the first candidate's text.
//! The response body is parsed leniently: the provider answers `200` with
//! candidates on success, but error payloads (with or without an HTTP
//! error status) carry an `error.message` that is surfaced to the caller.

use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::GeminiConfig;
use crate::error::GeminiError;

/// Gemini generative-text client
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RoadRest/0.1")
            .build()
            .map_err(|e| GeminiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Generate text for one prompt.
    ///
    /// # Errors
    ///
    /// Returns `NoCandidates` when the provider produced no answer; the
    /// provider's own error message is carried when present.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateRequest::for_prompt(prompt);
        debug!(%prompt, model = %self.config.model, "Submitting generation request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))?;

        let provider_message = parsed.error.as_ref().map(|e| e.message.clone());
        if let Some(text) = parsed.first_text() {
            debug!(answer_len = text.len(), "Received generated text");
            return Ok(text);
        }

        if provider_message.is_none() && !status.is_success() {
            return Err(GeminiError::RequestFailed(format!("HTTP {status}")));
        }

        Err(GeminiError::NoCandidates { provider_message })
    }
}

/// Request body: `{ contents: [{ parts: [{ text }] }] }`
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateRequest {
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Lenient response shape covering both success and error payloads
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<RawCandidate>,
    #[serde(default)]
    error: Option<RawError>,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    content: Option<RawContent>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    #[serde(default)]
    parts: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
struct RawPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    message: String,
}

impl GenerateResponse {
    /// The first candidate's first part text, if any
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
