//! Domain layer for RoadRest
//!
//! Contains the core vocabulary of the system: geographic value objects,
//! the rest-area entity, and domain errors. This layer has no I/O
//! dependencies.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
