//! Gemini generative-text adapter

use application::ApplicationError;
use application::ports::GenerativeTextPort;
use async_trait::async_trait;
use integration_gemini::{GeminiClient, GeminiConfig, GeminiError};

/// Binds [`GeminiClient`] to the [`GenerativeTextPort`]
#[derive(Debug)]
pub struct GeminiTextAdapter {
    client: GeminiClient,
}

impl GeminiTextAdapter {
    /// Create a new adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, ApplicationError> {
        let client =
            GeminiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GenerativeTextPort for GeminiTextAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError> {
        self.client
            .generate(prompt)
            .await
            .map_err(|e: GeminiError| ApplicationError::InfoUnavailable(e.to_string()))
    }
}
