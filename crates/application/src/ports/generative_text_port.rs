//! Generative-text port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for one-shot text generation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerativeTextPort: Send + Sync {
    /// Submit one free-text prompt and return the first generated
    /// candidate's text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError>;
}
