//! Application services

mod info_service;
mod route_service;

pub use info_service::{InfoQuery, InfoService};
pub use route_service::{RoutePlan, RouteQuery, RouteService};
