/// Maximum zoom level
pub const MAX_LEVEL: u8 = 15;

/// Half the width of the Mercator world in metres
pub const H_BASE: f64 = 20037508.34;

/// Degrees to radians
pub const H_DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Lattice aspect, tan(30°)
pub const H_K: f64 = 0.5773502691896257;

/// Header alphabet. Two characters encode one of 900 header values.
pub const ALPHABET: &[u8; 30] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcd";

const POW3_LEN: usize = MAX_LEVEL as usize + 5;

/// Powers of three, `POW3[i] = 3^i`
pub const POW3: [i64; POW3_LEN] = {
    let mut table = [1i64; POW3_LEN];
    let mut i = 1;
    while i < POW3_LEN {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
};

/// Ternary decision boundary, `ceil(3^i / 2)`
pub const HALF_POW3: [i64; POW3_LEN] = {
    let mut table = [0i64; POW3_LEN];
    let mut i = 0;
    while i < POW3_LEN {
        table[i] = (POW3[i] + 1) / 2;
        i += 1;
    }
    table
};

const HEADER_INDEX: [Option<u8>; 128] = {
    let mut table = [None; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
};

/// Looks up the position of a header character in [`ALPHABET`].
pub fn header_index(c: u8) -> Option<u8> {
    HEADER_INDEX.get(c as usize).copied().flatten()
}

/// Projection scale of one zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    /// Hexagon size (half the distance between the flat edges' end points)
    pub size: f64,
    /// Lattice unit along the x axis
    pub w: f64,
    /// Lattice unit along the y axis
    pub h: f64,
}

impl Zoom {
    const fn at(level: usize) -> Self {
        let size = H_BASE / POW3[level + 3] as f64;
        Self {
            size,
            w: 6.0 * size,
            h: 6.0 * size * H_K,
        }
    }

    /// Returns the zoom parameters for `level`, or `None` above [`MAX_LEVEL`].
    pub fn for_level(level: u8) -> Option<&'static Zoom> {
        ZOOMS.get(level as usize)
    }
}

/// Zoom parameters for each level (0-15)
pub static ZOOMS: [Zoom; MAX_LEVEL as usize + 1] = {
    let mut zooms = [Zoom::at(0); MAX_LEVEL as usize + 1];
    let mut level = 1;
    while level <= MAX_LEVEL as usize {
        zooms[level] = Zoom::at(level);
        level += 1;
    }
    zooms
};
