//! Application-level errors
//!
//! One variant per failure category the orchestration distinguishes.
//! Geocoding keeps "not found" and network failures folded into a single
//! `Resolution` category at this level; the integration crates log the
//! finer-grained cause.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A place or address could not be resolved to coordinates
    #[error("Could not resolve place to coordinates: {0}")]
    Resolution(String),

    /// The directions provider returned no usable route
    #[error("Route lookup failed: {0}")]
    Routing(String),

    /// The generative-text provider returned no usable answer
    #[error("Rest-area info unavailable: {0}")]
    InfoUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
