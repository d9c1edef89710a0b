//! Prefix and digit validation shared by the scalar decoders and pass-through hex fields.

use crate::HexError;
use serde_json::Value;

/// Length of the `0x` prefix.
pub const HEX_PREFIX_LEN: usize = 2;

/// Strips the mandatory `0x`/`0X` prefix, returning the digit sequence.
pub fn strip_hex_prefix(s: &str) -> Result<&str, HexError> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).ok_or(HexError::MissingPrefix)
}

/// Checks that `s` is a `0x`-prefixed string of hex digits.
///
/// The digit sequence may be empty and of any length; this is the only constraint placed on
/// pass-through fields such as addresses, hashes and bloom filters.
pub fn validate_hex_string(s: &str) -> Result<(), HexError> {
    let digits = strip_hex_prefix(s)?;
    match digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((offset, found)) => {
            Err(HexError::InvalidDigit { position: offset + HEX_PREFIX_LEN, found })
        }
        None => Ok(()),
    }
}

/// Borrows the string inside a JSON token, rejecting every other token type.
pub fn expect_str(value: &Value) -> Result<&str, HexError> {
    value.as_str().ok_or_else(|| HexError::NotAString(json_type_name(value)))
}

/// Returns a human readable name for the type of a JSON token.
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
