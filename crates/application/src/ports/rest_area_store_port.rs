//! Rest-area store port
//!
//! Read-only access to the persistent rest-area table. Store failures are
//! a named outcome rather than an error: the route flow keeps answering
//! with an empty rest-area list when the store is down.

use async_trait::async_trait;
use domain::RestArea;
#[cfg(test)]
use mockall::automock;

/// Outcome of a rest-area fetch
#[derive(Debug, Clone, PartialEq)]
pub enum RestAreaFetch {
    /// The store answered; the list may legitimately be empty
    Loaded(Vec<RestArea>),
    /// The store could not be reached or the query failed
    Unavailable,
}

impl RestAreaFetch {
    /// Collapse into a plain list, treating `Unavailable` as empty
    #[must_use]
    pub fn into_rest_areas(self) -> Vec<RestArea> {
        match self {
            Self::Loaded(areas) => areas,
            Self::Unavailable => Vec::new(),
        }
    }

    /// Whether the store answered
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Port for the read-only rest-area repository
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RestAreaStorePort: Send + Sync {
    /// Fetch every rest area in the store's natural order
    async fn list_all(&self) -> RestAreaFetch;

    /// Fetch the rest areas on one highway route
    async fn list_by_route(&self, route_no: &str) -> RestAreaFetch;
}
