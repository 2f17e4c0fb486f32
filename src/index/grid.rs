use crate::coord::{LatLon, PlanarPoint, inverse};
use crate::error::GeoHexError;
use crate::index::constants::{H_K, MAX_LEVEL, POW3, ZOOMS};
use crate::index::identifier::encode_position;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A tile on the hex lattice.
///
/// `x` and `y` are axial coordinates in units of the tile at `level`. The
/// six neighbours of a tile are `(±1, 0)`, `(0, ±1)`, `(1, 1)` and `(-1, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    /// Zoom level (0-15), where higher values mean smaller tiles
    pub level: u8,
}

impl Position {
    pub fn new(x: i64, y: i64, level: u8) -> Self {
        Self { x, y, level }
    }

    /// Returns the planar centroid of the tile.
    ///
    /// `n` must be computed before `e`: the lattice axes are not orthogonal.
    pub fn centroid(&self) -> PlanarPoint {
        let zoom = &ZOOMS[self.level as usize];
        let x = self.x as f64;
        let y = self.y as f64;
        let n = (H_K * x * zoom.w + y * zoom.h) / 2.0;
        let e = (n - y * zoom.h) / H_K;
        PlanarPoint { e, n }
    }

    /// Returns the geographic location of the tile centroid.
    pub fn lat_lon(&self) -> LatLon {
        inverse(&self.centroid(), self.level)
    }

    /// Serializes the position into its code.
    pub fn code(&self) -> String {
        encode_position(self)
    }

    /// Number of lattice steps between two tiles of the same level.
    ///
    /// Steps are counted on the plane, so the antimeridian is not wrapped.
    pub fn steps_to(&self, other: &Position) -> Option<u64> {
        if self.level != other.level {
            return None;
        }
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let steps = if dx.signum() == dy.signum() {
            dx.unsigned_abs().max(dy.unsigned_abs())
        } else {
            dx.unsigned_abs() + dy.unsigned_abs()
        };
        Some(steps)
    }

    /// Folds positions outside the lattice's outer ring back onto it.
    ///
    /// Ternary accumulation overshoots at the edge of the world, landing up to
    /// a few steps past `|x - y| = 3^(level+2)`. Those tiles are mirrored onto
    /// their counterparts, and tiles exactly on the ring keep `x <= y`.
    pub fn normalize(self) -> Self {
        let Position { x, y, level } = self;
        let d_a = (x - y).abs();
        let d_m = POW3[level as usize + 2];

        let (nx, ny) = if d_a == d_m && x > y {
            (y, x)
        } else if d_a > d_m {
            let d_s = d_a - d_m;
            let d_x = d_s / 2;
            let d_y = d_s - d_x;
            if x > y {
                (y + d_x + d_y, x - d_x - d_y)
            } else {
                (y - d_y - d_x, x + d_x + d_y)
            }
        } else {
            (x, y)
        };

        if (nx, ny) != (x, y) {
            trace!(x, y, nx, ny, level, "normalized position");
        }
        Position { x: nx, y: ny, level }
    }
}

/// Finds the tile containing a planar point at the given level.
///
/// Returns a normalized position.
pub fn point_to_position(point: &PlanarPoint, level: u8) -> Result<Position, GeoHexError> {
    if level > MAX_LEVEL {
        return Err(GeoHexError::LevelInvalid(level as i64));
    }

    let zoom = &ZOOMS[level as usize];
    let px = (point.e + point.n / H_K) / zoom.w;
    let py = (point.n - H_K * point.e) / zoom.h;

    let x0 = px.floor();
    let y0 = py.floor();
    let xq = px - x0;
    let yq = py - y0;

    // nearest lattice point, corrected inside the rhombus between the two
    // diagonal candidates
    let (mut x, mut y) = ((px + 0.5).floor(), (py + 0.5).floor());
    if yq > -xq + 1.0 {
        if yq < 2.0 * xq && yq > 0.5 * xq {
            (x, y) = (x0 + 1.0, y0 + 1.0);
        }
    } else if yq < -xq + 1.0 && yq > 2.0 * xq - 1.0 && yq < 0.5 * xq + 0.5 {
        (x, y) = (x0, y0);
    }

    Ok(Position::new(x as i64, y as i64, level).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::forward;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_to_position_known_tile() -> Result<(), GeoHexError> {
        let p = forward(85.04354094565655, 89.2529296875);
        let pos = point_to_position(&p, 3)?;
        assert_eq!(pos, Position::new(271, 150, 3));
        Ok(())
    }

    #[test]
    fn test_point_to_position_origin() -> Result<(), GeoHexError> {
        let pos = point_to_position(&PlanarPoint::new(0.0, 0.0), 5)?;
        assert_eq!(pos, Position::new(0, 0, 5));
        Ok(())
    }

    #[test]
    fn test_centroid_maps_back_to_same_tile() -> Result<(), GeoHexError> {
        for level in [0, 4, 9, 15] {
            for (x, y) in [(0, 0), (3, -5), (-6, 2), (40, 41)] {
                let pos = Position::new(x, y, level);
                assert_eq!(point_to_position(&pos.centroid(), level)?, pos);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invalid_level() {
        let result = point_to_position(&PlanarPoint::new(0.0, 0.0), 16);
        assert!(matches!(result, Err(GeoHexError::LevelInvalid(16))));
    }

    #[test]
    fn test_centroid_axes() {
        let zoom = &ZOOMS[2];

        // (1, 1) is straight north, (1, -1) straight east
        let north = Position::new(1, 1, 2).centroid();
        assert_relative_eq!(north.e, 0.0, epsilon = 1e-6);
        assert_relative_eq!(north.n, zoom.w * H_K, max_relative = 1e-12);

        let east = Position::new(1, -1, 2).centroid();
        assert_relative_eq!(east.e, zoom.w, max_relative = 1e-12);
        assert_relative_eq!(east.n, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_inside_is_untouched() {
        let pos = Position::new(-4, -30, 1);
        assert_eq!(pos.normalize(), pos);
    }

    #[test]
    fn test_normalize_ring_tie_break() {
        // |x - y| == 27 at level 1
        assert_eq!(Position::new(14, -13, 1).normalize(), Position::new(-13, 14, 1));
        assert_eq!(Position::new(-13, 14, 1).normalize(), Position::new(-13, 14, 1));
    }

    #[test]
    fn test_normalize_overshoot() {
        // level 0, d_m = 9: d_a = 12 gives d_s = 3, d_x = 1, d_y = 2
        assert_eq!(Position::new(10, -2, 0).normalize(), Position::new(1, 7, 0));
        assert_eq!(Position::new(-2, 10, 0).normalize(), Position::new(7, 1, 0));
    }

    #[test]
    fn test_normalize_closure() {
        // overshoot below 2 * 3^(level+2) folds back inside the ring
        for x in -13..=13 {
            for y in -13..=13 {
                let pos = Position::new(x, y, 0).normalize();
                assert!((pos.x - pos.y).abs() <= POW3[2]);
            }
        }
    }

    #[test]
    fn test_steps_to() {
        let origin = Position::new(0, 0, 4);
        assert_eq!(origin.steps_to(&origin), Some(0));
        assert_eq!(origin.steps_to(&Position::new(1, 1, 4)), Some(1));
        assert_eq!(origin.steps_to(&Position::new(-1, 0, 4)), Some(1));
        assert_eq!(origin.steps_to(&Position::new(1, -1, 4)), Some(2));
        assert_eq!(origin.steps_to(&Position::new(3, 5, 4)), Some(5));
        assert_eq!(origin.steps_to(&Position::new(3, -5, 4)), Some(8));
        assert_eq!(origin.steps_to(&Position::new(1, 1, 5)), None);
    }
}
