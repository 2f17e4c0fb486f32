use crate::error::GeoHexError;
use crate::index::constants::{ALPHABET, HALF_POW3, MAX_LEVEL, POW3, header_index};
use crate::index::grid::Position;
use tracing::{debug, trace};

/// Serializes a position into its GeoHex code.
///
/// The code is `level + 2` characters long: two header characters from
/// [`ALPHABET`] followed by `level` digits in `'0'..='8'`.
///
/// # Format
///
/// Both axes are written as balanced ternary with `level + 3` trits each,
/// most significant first, trit `t` standing for `t - 1` units of `3^n`.
/// Each body digit packs one trit pair as `3 * tx + ty`. The three most
/// significant pairs are packed into a number in `0..900`, read as two
/// base-30 header characters.
///
/// Tiles along the lattice's outer ring can be written with two headers that
/// decode to the same position. Tiles whose centroid snaps to the western
/// seam (-180°) take the header with the mirrored top pair; every other tile
/// keeps the header its trits produce.
///
/// # Example
/// ```
/// use geohex_rs::{Position, encode_position};
///
/// let code = encode_position(&Position::new(271, 150, 3));
/// assert_eq!(code, "bb337");
/// ```
///
/// # Panics
///
/// If the position's level is above [`MAX_LEVEL`].
pub fn encode_position(pos: &Position) -> String {
    let level = pos.level as usize;
    let (mut x, mut y) = (pos.x, pos.y);

    let mut code = Vec::with_capacity(level + 2);
    let mut bx = [0u8; 3];
    let mut by = [0u8; 3];

    for i in 0..level + 3 {
        let n = level + 2 - i;
        let tx = take_trit(&mut x, n);
        let ty = take_trit(&mut y, n);

        if i < 3 {
            bx[i] = tx;
            by[i] = ty;
        } else {
            code.push(b'0' + 3 * tx + ty);
        }
    }

    let lon = pos.lat_lon().lon;
    if lon == -180.0 && bx[1] == by[1] && bx[2] == by[2] {
        let mirrored = match (bx[0], by[0]) {
            (2, 1) => Some((1, 2)),
            (1, 0) => Some((0, 1)),
            _ => None,
        };
        if let Some((x0, y0)) = mirrored {
            trace!(?pos, from = ?(bx[0], by[0]), to = ?(x0, y0), "mirrored header");
            bx[0] = x0;
            by[0] = y0;
        }
    }

    let base = 3 * trits_to_decimal(&bx) + trits_to_decimal(&by);
    let mut out = String::with_capacity(level + 2);
    out.push(ALPHABET[base / 30] as char);
    out.push(ALPHABET[base % 30] as char);
    out.extend(code.into_iter().map(char::from));
    out
}

/// Decodes a GeoHex code into a normalized position.
///
/// # Process
///
/// 1. Infers the level from the code length (`len - 2`) and validates it
/// 2. Checks the header characters against [`ALPHABET`] and the rest are digits
/// 3. Expands the header to three decimal digits (`n1 * 30 + n2`, zero padded)
/// 4. Accumulates each digit's trit pair, weighted by descending powers of 3
/// 5. Folds the result back inside the lattice's outer ring
///
/// # Example
/// ```
/// use geohex_rs::{Position, decode_code};
///
/// let pos = decode_code("bb337").unwrap();
/// assert_eq!(pos, Position::new(271, 150, 3));
/// ```
///
/// # Errors
///
/// - [`GeoHexError::LevelInvalid`] - Code length implies a level outside 0-15
/// - [`GeoHexError::CodeInvalid`] - A header character is not in the alphabet,
///   or a body character is not a decimal digit
pub fn decode_code(code: &str) -> Result<Position, GeoHexError> {
    let bytes = code.as_bytes();
    let level = bytes.len() as i64 - 2;
    if !(0..=MAX_LEVEL as i64).contains(&level) {
        debug!(code, level, "rejected code length");
        return Err(GeoHexError::LevelInvalid(level));
    }

    let (n1, n2) = match (header_index(bytes[0]), header_index(bytes[1])) {
        (Some(n1), Some(n2)) => (n1 as usize, n2 as usize),
        _ => {
            debug!(code, "rejected code header");
            return Err(GeoHexError::CodeInvalid(format!(
                "header {:?} is not in the alphabet",
                &code[..code.char_indices().nth(2).map_or(code.len(), |(i, _)| i)]
            )));
        }
    };

    let base = n1 * 30 + n2;
    let mut digits = Vec::with_capacity(bytes.len() + 1);
    digits.extend_from_slice(&[(base / 100) as u8, (base / 10 % 10) as u8, (base % 10) as u8]);
    for &b in &bytes[2..] {
        if !b.is_ascii_digit() {
            debug!(code, "rejected code body");
            return Err(GeoHexError::CodeInvalid(format!(
                "expected a digit, got {:?}",
                code[2..].chars().find(|c| !c.is_ascii_digit()).unwrap_or('?')
            )));
        }
        digits.push(b - b'0');
    }

    let len = bytes.len();
    let (mut x, mut y) = (0i64, 0i64);
    for (i, &d) in digits.iter().enumerate() {
        let weight = POW3[len - i];
        x += axis_step(d / 3, weight);
        y += axis_step(d % 3, weight);
    }

    Ok(Position::new(x, y, level as u8).normalize())
}

/// Strips the balanced-ternary trit for `3^n` from `value`.
fn take_trit(value: &mut i64, n: usize) -> u8 {
    if *value >= HALF_POW3[n] {
        *value -= POW3[n];
        2
    } else if *value <= -HALF_POW3[n] {
        *value += POW3[n];
        0
    } else {
        1
    }
}

fn axis_step(trit: u8, weight: i64) -> i64 {
    match trit {
        0 => -weight,
        2 => weight,
        _ => 0,
    }
}

fn trits_to_decimal(t: &[u8; 3]) -> usize {
    100 * t[0] as usize + 10 * t[1] as usize + t[2] as usize
}
