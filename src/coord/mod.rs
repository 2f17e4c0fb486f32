mod mercator;

pub use mercator::{forward, inverse, unproject};

use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a WGS84 latitude and longitude.
///
/// Implemented for [`LatLon`], `(f64, f64)` tuples in `(lon, lat)` order and
/// `geo_types::Point<f64>` (x = longitude, y = latitude).
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.1
    }
    fn lon(&self) -> f64 {
        self.0
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Projects this coordinate onto the planar grid.
    pub fn to_planar(&self) -> PlanarPoint {
        forward(self.lat, self.lon)
    }

    /// Returns a `geo_types::Point` with x = longitude, y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl Coordinate for LatLon {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<LatLon> for Point<f64> {
    fn from(ll: LatLon) -> Self {
        ll.to_point()
    }
}

/// A point on the projected plane, in metres east and north of the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub e: f64,
    pub n: f64,
}

impl PlanarPoint {
    pub fn new(e: f64, n: f64) -> Self {
        Self { e, n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (135.61, 33.35);
        assert_eq!(tuple.lon(), 135.61);
        assert_eq!(tuple.lat(), 33.35);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(135.61, 33.35);
        assert_eq!(Coordinate::lon(&point), 135.61);
        assert_eq!(Coordinate::lat(&point), 33.35);
    }

    #[test]
    fn test_same_result_tuple_point_latlon() {
        let ll = LatLon::new(33.35, 135.61);
        let tuple: (f64, f64) = (135.61, 33.35);
        let point = ll.to_point();
        let from_tuple = forward(tuple.lat(), tuple.lon());
        let from_point = forward(Coordinate::lat(&point), Coordinate::lon(&point));

        assert_eq!(ll.to_planar(), from_tuple);
        assert_eq!(ll.to_planar(), from_point);
    }
}
