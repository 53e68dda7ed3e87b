//! Gemini client configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the Gemini generative-text client
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Base URL of the generative-language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier (e.g. "gemini-2.5-flash-lite")
    #[serde(default = "default_model")]
    pub model: String,

    /// API key, sent as the `key` query parameter
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from("")
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Create a configuration with the given API key and default endpoint
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Create a configuration pointing at a test server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: SecretString::from("test-key"),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.model.is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
