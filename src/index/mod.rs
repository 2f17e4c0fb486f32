pub mod constants;
mod grid;
mod identifier;

pub use constants::{ALPHABET, H_BASE, H_K, MAX_LEVEL, ZOOMS, Zoom};
pub use grid::{Position, point_to_position};
pub use identifier::{decode_code, encode_position};
