//! Arbitrary-precision hex quantities.

use crate::{HexError, expect_str, strip_hex_prefix, validate_hex_string};
use alloy_primitives::U256;
use core::{fmt, str::FromStr};
use derive_more::{Display, From, Into};
use num_bigint::BigUint;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_json::Value;

/// A hex-encoded quantity of unbounded magnitude.
///
/// Shares the wire format of [`HexInt`](crate::HexInt) but never overflows. Used for balances,
/// transferred values, gas prices and difficulty, which routinely exceed 2^64.
#[derive(Debug, Display, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct HexBig(pub BigUint);

impl HexBig {
    /// Parses a `0x`-prefixed hex string. An empty digit sequence decodes to zero.
    pub fn parse(s: &str) -> Result<Self, HexError> {
        validate_hex_string(s)?;
        let digits = strip_hex_prefix(s)?;
        if digits.is_empty() {
            return Ok(Self::default());
        }
        // Only ASCII hex digits remain after validation, all of which `parse_bytes` accepts.
        Ok(BigUint::parse_bytes(digits.as_bytes(), 16).map(Self).unwrap_or_default())
    }

    /// Decodes a JSON token, which must be a string.
    pub fn from_value(value: &Value) -> Result<Self, HexError> {
        Self::parse(expect_str(value)?)
    }

    /// Borrows the decoded value.
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the wrapper, returning the decoded value.
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns the value as a [`u64`] if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }

    /// Returns the value as a [`U256`] if it fits in 256 bits.
    pub fn to_u256(&self) -> Option<U256> {
        U256::try_from_be_slice(&self.0.to_bytes_be())
    }
}

impl From<U256> for HexBig {
    fn from(value: U256) -> Self {
        Self(BigUint::from_bytes_be(&value.to_be_bytes::<32>()))
    }
}

impl From<u64> for HexBig {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for HexBig {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for HexBig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexBigVisitor;

        impl Visitor<'_> for HexBigVisitor {
            type Value = HexBig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed hex quantity")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                HexBig::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexBigVisitor)
    }
}
