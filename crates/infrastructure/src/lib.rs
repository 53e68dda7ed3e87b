//! Infrastructure layer for RoadRest
//!
//! Configuration loading, SQLite persistence for the rest-area table, and
//! adapters binding the Kakao and Gemini clients to the application ports.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::{GeminiTextAdapter, KakaoDirectionsAdapter, KakaoGeocodingAdapter};
pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteRestAreaStore, create_pool};
