//! Kakao client errors

use thiserror::Error;

/// Errors that can occur while talking to the Kakao APIs
#[derive(Debug, Error)]
pub enum KakaoError {
    /// Connection to the Kakao API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed (non-success status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the Kakao response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Neither the address tier nor the keyword tier returned a candidate
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// The directions provider returned no routes or no sections
    #[error("No route found from {from} to {to}")]
    NoRoute {
        /// Origin coordinates
        from: String,
        /// Destination coordinates
        to: String,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl KakaoError {
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
