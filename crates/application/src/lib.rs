//! Application layer - use cases and orchestration
//!
//! Defines the ports the outside world must implement (geocoding,
//! directions, rest-area storage, generative text) and the services that
//! compose them into the route and info flows.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
