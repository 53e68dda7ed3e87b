//! Kakao API configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration shared by the Kakao Local and Kakao Mobility clients
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoConfig {
    /// Base URL for the Kakao Local (search) API
    #[serde(default = "default_local_base_url")]
    pub local_base_url: String,

    /// Base URL for the Kakao Mobility (directions) API
    #[serde(default = "default_navi_base_url")]
    pub navi_base_url: String,

    /// REST API key, sent as `Authorization: KakaoAK <key>`
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Geocoding request timeout in seconds
    #[serde(default = "default_geocode_timeout_secs")]
    pub geocode_timeout_secs: u64,

    /// Directions request timeout in seconds
    #[serde(default = "default_directions_timeout_secs")]
    pub directions_timeout_secs: u64,

    /// Route priority preference passed to the directions API
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_local_base_url() -> String {
    "https://dapi.kakao.com".to_string()
}

fn default_navi_base_url() -> String {
    "https://apis-navi.kakaomobility.com".to_string()
}

const fn default_geocode_timeout_secs() -> u64 {
    10
}

const fn default_directions_timeout_secs() -> u64 {
    15
}

fn default_priority() -> String {
    "RECOMMEND".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from("")
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            local_base_url: default_local_base_url(),
            navi_base_url: default_navi_base_url(),
            api_key: default_api_key(),
            geocode_timeout_secs: default_geocode_timeout_secs(),
            directions_timeout_secs: default_directions_timeout_secs(),
            priority: default_priority(),
        }
    }
}

impl KakaoConfig {
    /// Create a configuration with the given REST key and default endpoints
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Create a configuration pointing both APIs at one test server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            local_base_url: base_url.to_string(),
            navi_base_url: base_url.to_string(),
            api_key: SecretString::from("test-key"),
            geocode_timeout_secs: 5,
            directions_timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.local_base_url.is_empty() {
            return Err("local_base_url must not be empty".to_string());
        }
        if self.navi_base_url.is_empty() {
            return Err("navi_base_url must not be empty".to_string());
        }
        if self.geocode_timeout_secs == 0 || self.directions_timeout_secs == 0 {
            return Err("timeouts must be greater than 0".to_string());
        }
        if self.priority.is_empty() {
            return Err("priority must not be empty".to_string());
        }
        Ok(())
    }
}
