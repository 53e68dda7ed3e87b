//! Route polyline value object
//!
//! An ordered sequence of [`GeoPoint`]s approximating a driving path.
//! Built fresh per request from the directions provider's flat vertex
//! arrays; never persisted.

use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;

/// Ordered polyline of a driving route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePolyline(Vec<GeoPoint>);

impl RoutePolyline {
    /// Create an empty polyline
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Append the vertexes of one road segment.
    ///
    /// The provider encodes each segment as a flat numeric array of
    /// consecutive (longitude, latitude) pairs. Pairs are appended in
    /// order; a trailing unpaired value is ignored.
    pub fn extend_from_vertexes(&mut self, vertexes: &[f64]) {
        self.0.reserve(vertexes.len() / 2);
        for pair in vertexes.chunks_exact(2) {
            self.0.push(GeoPoint::new_unchecked(pair[0], pair[1]));
        }
    }

    /// Build a polyline from an ordered list of segment vertex arrays
    #[must_use]
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut polyline = Self::empty();
        for vertexes in segments {
            polyline.extend_from_vertexes(vertexes);
        }
        polyline
    }

    /// Number of points in the polyline
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the polyline has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The ordered points
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }
}

impl From<Vec<GeoPoint>> for RoutePolyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

impl IntoIterator for RoutePolyline {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
