mod hexagon;

pub use hexagon::{hexagon_vertices, tile_polygon};
