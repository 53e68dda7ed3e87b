//! Raw Kakao wire formats
//!
//! Deserialization targets for the Local search and Mobility directions
//! responses. Only the fields the aggregator consumes are modeled.

use serde::Deserialize;

/// Kakao Local search response (address and keyword tiers share this shape)
#[derive(Debug, Deserialize)]
pub(crate) struct LocalSearchResponse {
    #[serde(default)]
    pub documents: Vec<LocalDocument>,
}

/// One search candidate; coordinates arrive as string-encoded floats
#[derive(Debug, Deserialize)]
pub(crate) struct LocalDocument {
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
}

/// Kakao Mobility directions response
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSection {
    #[serde(default)]
    pub roads: Vec<RawRoad>,
}

/// One road segment; `vertexes` is a flat `[x0, y0, x1, y1, ...]` array
#[derive(Debug, Deserialize)]
pub(crate) struct RawRoad {
    #[serde(default)]
    pub vertexes: Vec<f64>,
}
