//! Port adapters
//!
//! Thin wrappers binding the integration clients to the application
//! ports. Each adapter owns one client and translates its error enum into
//! the application-level failure category for that collaborator.

mod directions_adapter;
mod generative_text_adapter;
mod geocoding_adapter;

pub use directions_adapter::KakaoDirectionsAdapter;
pub use generative_text_adapter::GeminiTextAdapter;
pub use geocoding_adapter::KakaoGeocodingAdapter;
