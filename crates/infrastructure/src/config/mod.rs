//! Application configuration
//!
//! One explicit configuration object constructed at startup and passed
//! into every component constructor; no ambient global lookups. Loaded
//! from a TOML file (`ROADREST_CONFIG`, else `roadrest.toml`) with
//! environment overrides for the secrets and the server binding:
//!
//! - `KAKAO_REST_API_KEY` — Kakao REST key
//! - `GEMINI_API_KEY` — Gemini API key
//! - `ROADREST_HOST` / `ROADREST_PORT` — server binding
//! - `ROADREST_DB_PATH` — SQLite database path

mod database;
mod server;

use integration_gemini::GeminiConfig;
use integration_kakao::KakaoConfig;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Default configuration file name
const DEFAULT_CONFIG_PATH: &str = "roadrest.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Kakao Local / Mobility settings
    #[serde(default)]
    pub kakao: KakaoConfig,

    /// Gemini generative-text settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// A missing file is not an error (defaults apply); a present but
    /// malformed file is. Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is unreadable/malformed or the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("ROADREST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if std::path::Path::new(&path).exists() {
            info!(%path, "Loading configuration file");
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            debug!(%path, "No configuration file, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-variable overrides (secrets and server binding)
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("KAKAO_REST_API_KEY") {
            self.kakao.api_key = SecretString::from(key);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini.api_key = SecretString::from(key);
        }
        if let Ok(host) = std::env::var("ROADREST_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ROADREST_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("ROADREST_DB_PATH") {
            self.database.path = path;
        }
    }

    /// Validate the assembled configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.kakao
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("kakao: {e}")))?;
        self.gemini
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("gemini: {e}")))?;
        if self.server.host.is_empty() {
            return Err(ConfigError::Invalid(
                "server: host must not be empty".to_string(),
            ));
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::Invalid(
                "database: path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let raw = r#"
            [server]
            port = 9000

            [kakao]
            geocode_timeout_secs = 7

            [gemini]
            model = "gemini-2.5-flash"
        "#;
        let config: AppConfig = toml::from_str(raw).expect("parses");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.kakao.geocode_timeout_secs, 7);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.database.path, "roadrest.db");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").expect("parses");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.kakao.priority, "RECOMMEND");
    }

    #[test]
    fn invalid_section_is_named() {
        let config = AppConfig {
            gemini: GeminiConfig {
                model: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().expect_err("invalid");
        assert!(err.to_string().contains("gemini"));
    }
}
