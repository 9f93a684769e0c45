use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting values outside `[-90,90]` / `[-180,180]`.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let coord = Self {
            latitude,
            longitude,
        };
        coord.is_valid().then_some(coord)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Deserialized values bypass `new`, so consumers re-check before use.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_limits() {
        assert!(Coordinate::new(90.0, 180.0).is_some());
        assert!(Coordinate::new(-90.0, -180.0).is_some());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(Coordinate::new(90.1, 0.0).is_none());
        assert!(Coordinate::new(0.0, -180.5).is_none());
        assert!(Coordinate::new(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn deserialized_coordinate_can_be_invalid() {
        let coord: Coordinate =
            serde_json::from_str(r#"{"latitude": 120.0, "longitude": 3.0}"#).unwrap();
        assert!(!coord.is_valid());
    }
}
