//! Fixed-width hex quantities.

use crate::{HexError, expect_str, hex::validate_hex_string, strip_hex_prefix};
use core::{fmt, str::FromStr};
use derive_more::{Display, From, Into};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_json::Value;

/// A hex-encoded quantity that fits in a [`u64`].
///
/// Decodes from a JSON string such as `"0x1cc348"`. Bare JSON numbers are rejected, as are
/// strings without the `0x` prefix or with a sign.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct HexInt(pub u64);

impl HexInt {
    /// Returns the decoded value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a `0x`-prefixed hex string.
    ///
    /// An empty digit sequence decodes to zero. Leading zeros are ignored, so the only
    /// way to overflow is a significant magnitude above [`u64::MAX`].
    pub fn parse(s: &str) -> Result<Self, HexError> {
        validate_hex_string(s)?;
        let digits = strip_hex_prefix(s)?;
        if digits.is_empty() {
            return Ok(Self(0));
        }
        // Digits are validated above, so the only remaining failure is overflow.
        u64::from_str_radix(digits, 16).map(Self).map_err(|_| HexError::Overflow)
    }

    /// Decodes a JSON token, which must be a string.
    pub fn from_value(value: &Value) -> Result<Self, HexError> {
        Self::parse(expect_str(value)?)
    }
}

impl FromStr for HexInt {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<u64> for HexInt {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for HexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexIntVisitor;

        impl Visitor<'_> for HexIntVisitor {
            type Value = HexInt;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed hex quantity")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                HexInt::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexIntVisitor)
    }
}
