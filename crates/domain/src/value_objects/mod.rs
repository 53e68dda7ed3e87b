//! Value objects

mod geo_point;
mod route_polyline;

pub use geo_point::GeoPoint;
pub use route_polyline::RoutePolyline;
