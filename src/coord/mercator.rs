//! Spherical Mercator projection scaled to the GeoHex plane.
//!
//!   forward: e = lon·B/180, n = ln(tan((90 + lat)·π/360)) / (π/180) · B/180
//!   inverse: lon = e/B·180, lat = 180/π · (2·atan(exp(n/B·180·π/180)) − π/2)
//!
//! where B is [`H_BASE`]. Longitudes are not wrapped, so ±180° project to ±B.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::coord::{LatLon, PlanarPoint};
use crate::index::constants::{H_BASE, H_DEG_TO_RAD, ZOOMS};

/// Projects a latitude/longitude onto the plane.
pub fn forward(lat: f64, lon: f64) -> PlanarPoint {
    let e = lon * H_BASE / 180.0;
    let n = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0) * H_BASE / 180.0;
    PlanarPoint { e, n }
}

/// Plain inverse Mercator, no seam handling.
pub fn unproject(p: &PlanarPoint) -> LatLon {
    LatLon {
        lat: latitude(p.n),
        lon: p.e / H_BASE * 180.0,
    }
}

/// Inverts a tile centroid at `level` back to latitude/longitude.
///
/// Centroids within half a tile of the western seam (-B) snap to exactly
/// -180°, so tiles straddling the antimeridian have a single longitude.
///
/// # Panics
///
/// If `level` is above [`MAX_LEVEL`](crate::MAX_LEVEL).
pub fn inverse(p: &PlanarPoint, level: u8) -> LatLon {
    let zoom = &ZOOMS[level as usize];
    let lat = latitude(p.n);
    let lon = if (-H_BASE - p.e).abs() > zoom.size / 2.0 {
        p.e / H_BASE * 180.0
    } else {
        -180.0
    };
    LatLon { lat, lon }
}

fn latitude(n: f64) -> f64 {
    let exp = (n / H_BASE * 180.0 * H_DEG_TO_RAD).exp();
    180.0 / PI * (2.0 * exp.atan() - FRAC_PI_2)
}
