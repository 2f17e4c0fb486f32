use thiserror::Error;

/// Error type for geohex-rs operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoHexError {
    /// The level is outside the valid range (0-15).
    ///
    /// For codes this is the level implied by the code length, so codes
    /// shorter than two characters report a negative level.
    #[error("Invalid level: {0} (must be 0-15)")]
    LevelInvalid(i64),
    /// A code character is not valid for its position.
    #[error("Invalid code: {0}")]
    CodeInvalid(String),
}
