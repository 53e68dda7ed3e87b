//! Kakao Mobility directions client
//!
//! Fetches the recommended driving route between two coordinate pairs and
//! extracts the polyline of the first section of the first route: the
//! vertex lists of every road segment, concatenated in order.

use std::time::Duration;

use domain::{GeoPoint, RoutePolyline};
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::models::DirectionsResponse;

const DIRECTIONS_PATH: &str = "/v1/directions";

/// Kakao Mobility directions client
#[derive(Debug)]
pub struct KakaoNaviClient {
    client: Client,
    config: KakaoConfig,
}

impl KakaoNaviClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &KakaoConfig) -> Result<Self, KakaoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.directions_timeout_secs))
            .user_agent("RoadRest/0.1")
            .build()
            .map_err(|e| KakaoError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Fetch the recommended route between two points.
    ///
    /// A first section whose road list is empty yields an empty polyline;
    /// only zero routes or zero sections count as `NoRoute`.
    ///
    /// # Errors
    ///
    /// Returns `NoRoute` when the provider has no answer, and
    /// connection/parse variants when the call itself fails.
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    pub async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RoutePolyline, KakaoError> {
        let url = format!("{}{}", self.config.navi_base_url, DIRECTIONS_PATH);
        let origin_param = origin.to_query_param();
        let destination_param = destination.to_query_param();

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("KakaoAK {}", self.config.api_key.expose_secret()),
            )
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("priority", self.config.priority.as_str()),
            ])
            .send()
            .await
            .map_err(|e| KakaoError::from_reqwest(&e, self.config.directions_timeout_secs))?;

        if !response.status().is_success() {
            return Err(KakaoError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| KakaoError::ParseError(e.to_string()))?;

        let no_route = || KakaoError::NoRoute {
            from: origin_param.clone(),
            to: destination_param.clone(),
        };

        let first_route = parsed.routes.into_iter().next().ok_or_else(no_route)?;
        let first_section = first_route.sections.into_iter().next().ok_or_else(no_route)?;

        let polyline = RoutePolyline::from_segments(
            first_section.roads.iter().map(|road| road.vertexes.as_slice()),
        );
        debug!(points = polyline.len(), "Extracted route polyline");

        Ok(polyline)
    }
}
