//! Route planning orchestration
//!
//! Composes geocoding, directions, and the rest-area store into one
//! response: resolve start, resolve end, fetch the route, then attach the
//! rest-area list. Any failure before the store read short-circuits; the
//! store is never consulted for a request that already failed.

use std::sync::Arc;

use domain::{RestArea, RoutePolyline};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{DirectionsPort, GeocodingPort, RestAreaFetch, RestAreaStorePort};

/// Transient `/route` request payload
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Start place or address text
    pub start: String,
    /// End place or address text
    pub end: String,
}

/// Combined route response
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Ordered polyline of the recommended route
    pub route: RoutePolyline,
    /// Rest areas to display alongside the route
    pub rests: Vec<RestArea>,
}

/// Orchestrates the route flow
pub struct RouteService {
    geocoder: Arc<dyn GeocodingPort>,
    directions: Arc<dyn DirectionsPort>,
    rest_areas: Arc<dyn RestAreaStorePort>,
}

impl std::fmt::Debug for RouteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteService").finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service over the given ports
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        directions: Arc<dyn DirectionsPort>,
        rest_areas: Arc<dyn RestAreaStorePort>,
    ) -> Self {
        Self {
            geocoder,
            directions,
            rest_areas,
        }
    }

    /// Plan a route and collect the rest-area list.
    ///
    /// Store unavailability is absorbed into an empty `rests` list; every
    /// other failure propagates to the caller.
    #[instrument(skip(self), fields(start = %query.start, end = %query.end))]
    pub async fn plan(&self, query: &RouteQuery) -> Result<RoutePlan, ApplicationError> {
        let origin = self.geocoder.resolve(&query.start).await?;
        let destination = self.geocoder.resolve(&query.end).await?;

        let route = self.directions.route(origin, destination).await?;
        info!(points = route.len(), "Route fetched");

        let rests = match self.rest_areas.list_all().await {
            RestAreaFetch::Loaded(areas) => areas,
            RestAreaFetch::Unavailable => {
                warn!("Rest-area store unavailable, answering with empty list");
                Vec::new()
            },
        };

        Ok(RoutePlan { route, rests })
    }
}
