#[cfg(test)]
#[path = "../../../tests/unit/models/common/geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// An equatorial radius used by the spherical web mercator projection (EPSG:3857).
const EARTH_RADIUS_M: f64 = 6_378_137.;

/// Represents a geographical position in WGS84 degrees (EPSG:4326).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Position {
    /// Creates a new [`Position`].
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Projects position to web mercator plane, returns (x, y) in meters.
    pub fn to_mercator(&self) -> (f64, f64) {
        let x = EARTH_RADIUS_M * self.lng.to_radians();
        let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + self.lat.to_radians() / 2.).tan().ln();

        (x, y)
    }

    /// Returns euclidean distance in meters between projected positions.
    pub fn planar_distance(&self, other: &Position) -> f64 {
        let (x1, y1) = self.to_mercator();
        let (x2, y2) = other.to_mercator();

        (x1 - x2).hypot(y1 - y2)
    }
}
