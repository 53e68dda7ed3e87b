//! Kakao mapping integration for RoadRest
//!
//! Provides place/address geocoding via the Kakao Local API (two-tier:
//! address search first, keyword search as fallback) and driving routes
//! via the Kakao Mobility directions API. Both APIs share one REST key
//! sent as a `KakaoAK` authorization header.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_kakao::{KakaoConfig, KakaoLocalClient, KakaoNaviClient};
//!
//! let config = KakaoConfig::new(api_key);
//! let geocoder = KakaoLocalClient::new(&config)?;
//! let origin = geocoder.resolve("Seoul Station").await?;
//! let destination = geocoder.resolve("Busan Station").await?;
//!
//! let navi = KakaoNaviClient::new(&config)?;
//! let polyline = navi.route(origin, destination).await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod models;

pub use config::KakaoConfig;
pub use directions::KakaoNaviClient;
pub use error::KakaoError;
pub use geocoding::KakaoLocalClient;
