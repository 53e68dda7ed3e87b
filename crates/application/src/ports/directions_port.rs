//! Directions port

use async_trait::async_trait;
use domain::{GeoPoint, RoutePolyline};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving-route lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Fetch the recommended driving route between two points.
    ///
    /// Returns the polyline of the first section of the first route the
    /// provider offers, segment and vertex order preserved.
    async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RoutePolyline, ApplicationError>;
}
