//! Highway rest-area entity
//!
//! A read-only record owned by the persistent store. The core never
//! mutates rest areas; their lifetime is independent of any request.

use serde::{Deserialize, Serialize};

/// A highway service facility with location and amenity attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestArea {
    /// Store-assigned identifier
    pub id: i64,
    /// Facility name
    pub name: String,
    /// Highway route identifier (e.g. "1" for Gyeongbu)
    pub route_no: String,
    /// Travel direction served (e.g. "Seoul", "Busan")
    pub direction: String,
    /// Latitude of the facility
    pub lat: f64,
    /// Longitude of the facility
    pub lng: f64,
    /// Signature food offerings (possibly empty)
    #[serde(default)]
    pub food: String,
    /// Fuel station on site
    #[serde(default)]
    pub gas: bool,
    /// EV charging on site
    #[serde(default)]
    pub elec: bool,
    /// Pharmacy on site
    #[serde(default)]
    pub pharmacy: bool,
    /// Nursing room on site
    #[serde(default)]
    pub nurse: bool,
    /// Contact telephone number
    #[serde(default)]
    pub tel: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RestArea {
        RestArea {
            id: 1,
            name: "Anseong Rest Area".to_string(),
            route_no: "1".to_string(),
            direction: "Busan".to_string(),
            lat: 37.0075,
            lng: 127.1893,
            food: "Sotteok sotteok".to_string(),
            gas: true,
            elec: true,
            pharmacy: false,
            nurse: true,
            tel: "031-655-0108".to_string(),
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let area = sample();
        let json = serde_json::to_string(&area).expect("serialize");
        let back: RestArea = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, area);
    }

    #[test]
    fn amenity_flags_default_to_false() {
        let json = r#"{
            "id": 7,
            "name": "Seosan Rest Area",
            "route_no": "15",
            "direction": "Seoul",
            "lat": 36.8,
            "lng": 126.5
        }"#;
        let area: RestArea = serde_json::from_str(json).expect("deserialize");
        assert!(!area.gas);
        assert!(!area.pharmacy);
        assert!(area.food.is_empty());
        assert!(area.tel.is_empty());
    }
}
