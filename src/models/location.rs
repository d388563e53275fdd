//! Geographic coordinates

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in kilometres (mean earth radius 6371 km)
    #[must_use]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let from = HaversineLocation {
            latitude: self.lat,
            longitude: self.lng,
        };
        let to = HaversineLocation {
            latitude: other.lat,
            longitude: other.lng,
        };
        distance(from, to, Units::Kilometers)
    }

    /// Format as "lat, lng" rounded to two decimals
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.2}, {:.2}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let shinjuku = Coordinates::new(35.68, 139.69);
        assert!(shinjuku.distance_km(&shinjuku).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates::new(35.7056, 139.4084);
        let b = Coordinates::new(34.6919, 135.5060);
        let ab = a.distance_km(&b);
        let ba = b.distance_km(&a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_latitude() {
        let a = Coordinates::new(35.0, 139.0);
        let b = Coordinates::new(36.0, 139.0);
        let d = a.distance_km(&b);
        assert!((d - 111.19).abs() < 111.19 * 0.01, "got {d}");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Coordinates::new(35.681_236, 139.767_125);
        assert_eq!(location.format_coordinates(), "35.68, 139.77");
    }
}
