//! Kakao directions adapter

use application::ApplicationError;
use application::ports::DirectionsPort;
use async_trait::async_trait;
use domain::{GeoPoint, RoutePolyline};
use integration_kakao::{KakaoConfig, KakaoError, KakaoNaviClient};

/// Binds [`KakaoNaviClient`] to the [`DirectionsPort`]
#[derive(Debug)]
pub struct KakaoDirectionsAdapter {
    client: KakaoNaviClient,
}

impl KakaoDirectionsAdapter {
    /// Create a new adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &KakaoConfig) -> Result<Self, ApplicationError> {
        let client =
            KakaoNaviClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DirectionsPort for KakaoDirectionsAdapter {
    async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RoutePolyline, ApplicationError> {
        self.client
            .route(origin, destination)
            .await
            .map_err(|e: KakaoError| ApplicationError::Routing(e.to_string()))
    }
}
