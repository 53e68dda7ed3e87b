//! SQLite database configuration

use serde::Deserialize;

/// SQLite database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:` for an in-memory database
    #[serde(default = "default_path")]
    pub path: String,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_path() -> String {
    "roadrest.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Configuration for an in-memory test database
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
        }
    }
}
