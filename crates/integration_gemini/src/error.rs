//! Gemini client errors

use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Connection to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed (non-success status without a provider message)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the provider response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider returned no generated candidates
    #[error("{}", provider_message.as_deref().unwrap_or("Provider returned no candidates"))]
    NoCandidates {
        /// The provider's own error message, when it sent one
        provider_message: Option<String>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeminiError {
    /// Map a reqwest failure, preserving timeouts as their own variant
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_surfaces_provider_message() {
        let err = GeminiError::NoCandidates {
            provider_message: Some("API key not valid".to_string()),
        };
        assert_eq!(err.to_string(), "API key not valid");
    }

    #[test]
    fn no_candidates_without_message_is_generic() {
        let err = GeminiError::NoCandidates {
            provider_message: None,
        };
        assert_eq!(err.to_string(), "Provider returned no candidates");
    }
}
