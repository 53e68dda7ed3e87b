//! Port definitions
//!
//! Async traits the infrastructure layer implements. Each port covers one
//! external collaborator: the geocoding provider, the directions provider,
//! the rest-area store, and the generative-text provider.

mod directions_port;
mod generative_text_port;
mod geocoding_port;
mod rest_area_store_port;

pub use directions_port::DirectionsPort;
pub use generative_text_port::GenerativeTextPort;
pub use geocoding_port::GeocodingPort;
pub use rest_area_store_port::{RestAreaFetch, RestAreaStorePort};

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
#[cfg(test)]
pub use generative_text_port::MockGenerativeTextPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use rest_area_store_port::MockRestAreaStorePort;
