//! Kakao geocoding adapter
//!
//! Every geocoder failure, "not found" and network alike, folds into the
//! single `Resolution` category the orchestration distinguishes; the
//! integration crate has already logged the finer-grained cause.

use application::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::GeoPoint;
use integration_kakao::{KakaoConfig, KakaoError, KakaoLocalClient};

/// Binds [`KakaoLocalClient`] to the [`GeocodingPort`]
#[derive(Debug)]
pub struct KakaoGeocodingAdapter {
    client: KakaoLocalClient,
}

impl KakaoGeocodingAdapter {
    /// Create a new adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &KakaoConfig) -> Result<Self, ApplicationError> {
        let client = KakaoLocalClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl GeocodingPort for KakaoGeocodingAdapter {
    async fn resolve(&self, query: &str) -> Result<GeoPoint, ApplicationError> {
        self.client
            .resolve(query)
            .await
            .map_err(|e: KakaoError| ApplicationError::Resolution(e.to_string()))
    }
}
