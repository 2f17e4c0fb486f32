//! # geohex-rs
//!
//! GeoHex v3: hexagonal tiles over the Mercator-projected Earth, each
//! identified by a short code. Level 0 tiles are a few thousand kilometres
//! across; each level divides them by three, down to level 15.
//!
//! There are currently two main entry points.
//!
//! ### 1. `encode` / `decode` - Codes
//!
//! ```
//! use geohex_rs::{decode, encode};
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let zone = encode(33.35137950146622, 135.6104480957031, 0)?;
//! assert_eq!(zone.code, "XM");
//!
//! let decoded = decode("XM")?;
//! assert_eq!(decoded.pos, zone.pos);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Zone` - Single Tile Operations
//!
//! ```
//! use geohex_rs::Zone;
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let zone: Zone = "QU408880".parse()?;
//! let ll = zone.lat_lon();
//! assert_eq!(ll.lon, -180.0);
//!
//! let polygon = zone.to_polygon();
//! assert_eq!(polygon.exterior().coords().count(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! Lower level pieces are exported too: the projection in [`coord`], the
//! lattice and code conversions in [`index`], and tile outlines in [`geom`].
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod zone;

pub use coord::{Coordinate, LatLon, PlanarPoint, forward, inverse};
pub use error::GeoHexError;
pub use geom::{hexagon_vertices, tile_polygon};
pub use index::{
    ALPHABET, MAX_LEVEL, Position, ZOOMS, Zoom, decode_code, encode_position, point_to_position,
};
pub use zone::{Zone, decode, encode};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHexError> {
        let zone = encode(35.6809591, 139.7673068, 9)?;
        assert_eq!(zone.level(), 9);
        assert_eq!(zone.code.len(), 11);

        let decoded = decode(&zone.code)?;
        assert_eq!(decoded.pos, zone.pos);

        let ll = decoded.lat_lon();
        assert!((ll.lat - 35.6809591).abs() < 0.01);
        assert!((ll.lon - 139.7673068).abs() < 0.01);

        let polygon = decoded.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 7);
        Ok(())
    }

    #[test]
    fn test_zone_contains_input_point() -> Result<(), GeoHexError> {
        use geo::Contains;
        use geo_types::Point;

        for level in [2, 6, 10] {
            let pt = Point::new(-0.1276, 51.5072);
            let zone = Zone::from_wgs84(&pt, level)?;
            assert!(zone.to_polygon().contains(&pt));
        }
        Ok(())
    }

    #[test]
    fn test_zone_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Zone>();
        assert_send_sync::<Position>();
        assert_send_sync::<GeoHexError>();
    }
}
