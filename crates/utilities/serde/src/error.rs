//! Error type for hex token decoding.

use thiserror::Error;

/// Failures produced while decoding a single hex-encoded JSON token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The JSON token was not a string.
    #[error("expected a 0x-prefixed hex string, found {0}")]
    NotAString(&'static str),
    /// The string did not start with `0x` or `0X`.
    #[error("missing 0x prefix")]
    MissingPrefix,
    /// A character after the prefix is not a hex digit.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character, counting the prefix.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// The decoded magnitude does not fit in 64 bits.
    #[error("quantity exceeds 64 bits")]
    Overflow,
}

impl HexError {
    /// Returns `true` if the token was well formed but too large for a fixed-width target.
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow)
    }
}
