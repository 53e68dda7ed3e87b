//! Geocoding port
//!
//! Converts free-text place/address strings to coordinates.

use async_trait::async_trait;
use domain::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place/address resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text place or address to a coordinate pair.
    ///
    /// Implementations attempt an address-style lookup first and fall back
    /// to a keyword-style lookup; the first candidate wins.
    async fn resolve(&self, query: &str) -> Result<GeoPoint, ApplicationError>;
}
