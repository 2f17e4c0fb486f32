use crate::coord::{Coordinate, LatLon, PlanarPoint, forward};
use crate::error::GeoHexError;
use crate::geom::tile_polygon;
use crate::index::{MAX_LEVEL, Position, decode_code, point_to_position};
use geo_types::Polygon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single hexagonal tile in the GeoHex system.
///
/// Each `Zone` pairs a tile's lattice [`Position`] with its code.
///
/// # Example
///
/// ```
/// use geohex_rs::Zone;
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// let zone = Zone::from_wgs84(&(135.6104480957031, 33.35137950146622), 0)?;
/// assert_eq!(zone.code, "XM");
///
/// let ll = zone.lat_lon();
/// println!("Center: ({}, {})", ll.lat, ll.lon);
///
/// // Convert the zone to a polygon for GIS operations
/// let polygon = zone.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Zone {
    /// GeoHex code, `level + 2` characters long
    pub code: String,
    /// Position on the hex lattice
    pub pos: Position,
}

impl Zone {
    /// Create a Zone from a lattice position.
    ///
    /// The position is normalized first, so equivalent positions yield equal zones.
    ///
    /// # Errors
    ///
    /// [`GeoHexError::LevelInvalid`] if the position's level is above 15.
    pub fn from_position(pos: Position) -> Result<Self, GeoHexError> {
        if pos.level > MAX_LEVEL {
            return Err(GeoHexError::LevelInvalid(pos.level as i64));
        }
        let pos = pos.normalize();
        Ok(Self {
            code: pos.code(),
            pos,
        })
    }

    /// Create a Zone from a GeoHex code
    ///
    /// The stored code is re-encoded from the decoded position, so both
    /// headers of a ring tile give the same zone.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// let zone = Zone::from_code("bb337")?;
    /// assert_eq!(zone.level(), 3);
    /// assert_eq!((zone.pos.x, zone.pos.y), (271, 150));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GeoHexError> {
        let pos = decode_code(code)?;
        Ok(Self {
            code: pos.code(),
            pos,
        })
    }

    /// Create a Zone from a projected point
    pub fn from_planar(point: &PlanarPoint, level: u8) -> Result<Self, GeoHexError> {
        let pos = point_to_position(point, level)?;
        Ok(Self {
            code: pos.code(),
            pos,
        })
    }

    /// Create a Zone from WGS84 coordinates
    ///
    /// # Example
    /// ```
    /// use geohex_rs::{LatLon, Zone};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// // From (lon, lat) tuple
    /// let zone = Zone::from_wgs84(&(89.2529296875, 85.04354094565655), 3)?;
    /// // From Point
    /// let zone = Zone::from_wgs84(&Point::new(89.2529296875, 85.04354094565655), 3)?;
    /// // From LatLon
    /// let zone = Zone::from_wgs84(&LatLon::new(85.04354094565655, 89.2529296875), 3)?;
    /// assert_eq!(zone.code, "bb337");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, level: u8) -> Result<Self, GeoHexError> {
        if level > MAX_LEVEL {
            return Err(GeoHexError::LevelInvalid(level as i64));
        }
        Self::from_planar(&forward(coord.lat(), coord.lon()), level)
    }

    /// Returns the zoom level (0-15).
    pub fn level(&self) -> u8 {
        self.pos.level
    }

    /// Returns the geographic location of the zone's centroid.
    pub fn lat_lon(&self) -> LatLon {
        self.pos.lat_lon()
    }

    /// Returns the projected centroid of the zone.
    pub fn centroid(&self) -> PlanarPoint {
        self.pos.centroid()
    }

    /// Converts this zone to a hexagonal polygon.
    ///
    /// Returns a `geo_types::Polygon` (x = longitude, y = latitude)
    /// representing the hexagon boundary.
    pub fn to_polygon(&self) -> Polygon<f64> {
        tile_polygon(&self.pos)
    }

    /// Returns the zone named by this code minus its last digit, or `None` at level 0.
    ///
    /// The parent is one level up and close to this zone, but hex tiles do not
    /// nest exactly, so it does not always contain it.
    pub fn parent(&self) -> Option<Self> {
        if self.level() == 0 {
            return None;
        }
        let prefix = self.code.get(..self.code.len() - 1)?;
        Self::from_code(prefix).ok()
    }

    /// Number of tile steps to another zone of the same level.
    pub fn steps_to(&self, other: &Zone) -> Option<u64> {
        self.pos.steps_to(&other.pos)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl TryFrom<String> for Zone {
    type Error = GeoHexError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.code
    }
}

impl FromStr for Zone {
    type Err = GeoHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Encodes a latitude/longitude into the zone containing it at `level`.
///
/// # Example
/// ```
/// use geohex_rs::encode;
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// let zone = encode(85.04354094565655, 89.2529296875, 3)?;
/// assert_eq!(zone.code, "bb337");
/// assert_eq!((zone.pos.x, zone.pos.y, zone.level()), (271, 150, 3));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`GeoHexError::LevelInvalid`] if `level` is above 15.
pub fn encode(lat: f64, lon: f64, level: u8) -> Result<Zone, GeoHexError> {
    Zone::from_wgs84(&LatLon::new(lat, lon), level)
}

/// Decodes a GeoHex code into its zone.
///
/// # Errors
///
/// - [`GeoHexError::LevelInvalid`] - Code length implies a level outside 0-15
/// - [`GeoHexError::CodeInvalid`] - Code contains a character not valid for its position
pub fn decode(code: &str) -> Result<Zone, GeoHexError> {
    Zone::from_code(code)
}
