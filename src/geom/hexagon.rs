use crate::coord::{PlanarPoint, unproject};
use crate::index::Position;
use crate::index::constants::ZOOMS;
use geo_types::{Coord, LineString, Polygon};

/// Returns the six planar vertices of a flat-topped tile around `center`.
///
/// Vertices run clockwise from the western corner. The circumradius is
/// twice the level's hexagon size.
///
/// # Panics
///
/// If `level` is above [`MAX_LEVEL`](crate::MAX_LEVEL).
pub fn hexagon_vertices(center: &PlanarPoint, level: u8) -> [PlanarPoint; 6] {
    let s = ZOOMS[level as usize].size;
    let h = 3.0_f64.sqrt() * s;
    let PlanarPoint { e, n } = *center;

    [
        PlanarPoint::new(e - 2.0 * s, n),
        PlanarPoint::new(e - s, n + h),
        PlanarPoint::new(e + s, n + h),
        PlanarPoint::new(e + 2.0 * s, n),
        PlanarPoint::new(e + s, n - h),
        PlanarPoint::new(e - s, n - h),
    ]
}

/// Builds the boundary of a tile as a lon/lat polygon.
///
/// Returns a closed `geo_types::Polygon` (x = longitude, y = latitude).
/// Tiles crossing the antimeridian extend past ±180°.
pub fn tile_polygon(pos: &Position) -> Polygon<f64> {
    let mut coords: Vec<Coord<f64>> = hexagon_vertices(&pos.centroid(), pos.level)
        .iter()
        .map(|v| {
            let ll = unproject(v);
            Coord { x: ll.lon, y: ll.lat }
        })
        .collect();
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hexagon_vertices_are_equidistant() {
        let center = PlanarPoint::new(1000.0, -2000.0);
        let r = 2.0 * ZOOMS[7].size;
        for v in hexagon_vertices(&center, 7) {
            let d = ((v.e - center.e).powi(2) + (v.n - center.n).powi(2)).sqrt();
            assert_relative_eq!(d, r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_neighbouring_tiles_share_an_edge() {
        let a = hexagon_vertices(&Position::new(0, 0, 4).centroid(), 4);
        let b = hexagon_vertices(&Position::new(1, 1, 4).centroid(), 4);

        // top edge of a is the bottom edge of its northern neighbour
        assert_relative_eq!(a[1].e, b[5].e, epsilon = 1e-6);
        assert_relative_eq!(a[1].n, b[5].n, epsilon = 1e-6);
        assert_relative_eq!(a[2].e, b[4].e, epsilon = 1e-6);
        assert_relative_eq!(a[2].n, b[4].n, epsilon = 1e-6);
    }

    #[test]
    fn test_tile_polygon_is_closed() {
        let polygon = tile_polygon(&Position::new(271, 150, 3));
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 7); // 6 vertices + 1 to close
        assert_eq!(exterior.0[0], exterior.0[6]);
    }

    #[test]
    fn test_tile_polygon_surrounds_centroid() {
        let pos = Position::new(5, -2, 0);
        let ll = pos.lat_lon();
        let polygon = tile_polygon(&pos);
        let xs: Vec<f64> = polygon.exterior().coords().map(|c| c.x).collect();
        let ys: Vec<f64> = polygon.exterior().coords().map(|c| c.y).collect();

        assert!(xs.iter().any(|&x| x < ll.lon) && xs.iter().any(|&x| x > ll.lon));
        assert!(ys.iter().any(|&y| y < ll.lat) && ys.iter().any(|&y| y > ll.lat));
    }
}
