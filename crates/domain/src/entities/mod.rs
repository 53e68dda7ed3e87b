//! Domain entities

mod rest_area;

pub use rest_area::RestArea;
