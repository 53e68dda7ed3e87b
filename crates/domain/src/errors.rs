//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate outside the valid longitude/latitude range
    #[error(
        "Invalid coordinates: longitude must be -180 to 180, latitude must be -90 to 90"
    )]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
