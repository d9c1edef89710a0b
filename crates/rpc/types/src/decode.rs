//! The [`FromJson`] decoding trait and the field accessors the record decoders are built from.

use crate::{DecodeError, DecodeResult, ROOT_FIELD};
use ethrpc_serde::{BigUint, HexBig, HexInt, expect_str, json_type_name, validate_hex_string};
use serde_json::{Map, Value};

/// A type that can be decoded from a JSON-RPC payload.
pub trait FromJson: Sized {
    /// Decodes `Self` from an already parsed JSON token.
    fn from_json(value: &Value) -> DecodeResult<Self>;

    /// Parses `bytes` as JSON and decodes `Self` from it.
    fn from_slice(bytes: &[u8]) -> DecodeResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json(&value)
    }

    /// Parses `s` as JSON and decodes `Self` from it.
    fn from_json_str(s: &str) -> DecodeResult<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl FromJson for HexInt {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        Self::from_value(value).map_err(|err| DecodeError::hex(ROOT_FIELD, err))
    }
}

impl FromJson for HexBig {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        Self::from_value(value).map_err(|err| DecodeError::hex(ROOT_FIELD, err))
    }
}

/// Decodes a top-level array such as the result of `eth_getLogs`.
impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Array(items) => records(ROOT_FIELD, items),
            other => Err(DecodeError::format(
                ROOT_FIELD,
                format!("expected an array, found {}", json_type_name(other)),
            )),
        }
    }
}

/// Decodes a pass-through hex string token, keeping its exact spelling.
pub(crate) fn hex_string(field: &'static str, value: &Value) -> DecodeResult<String> {
    let s = expect_str(value).map_err(|err| DecodeError::hex(field, err))?;
    validate_hex_string(s).map_err(|err| DecodeError::hex(field, err))?;
    Ok(s.to_owned())
}

/// Decodes every element of `items` as `T`, tagging a failure with its position in `field`.
pub(crate) fn records<T: FromJson>(field: &'static str, items: &[Value]) -> DecodeResult<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::from_json(item).map_err(|err| {
                debug!(target: "ethrpc::decode", field, index, %err, "Nested record failed to decode");
                DecodeError::nested(field, index, err)
            })
        })
        .collect()
}

/// Decodes every element of `items` as a pass-through hex string.
pub(crate) fn hex_strings(field: &'static str, items: &[Value]) -> DecodeResult<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            hex_string(field, item).map_err(|err| match err {
                DecodeError::Format { field, reason } => {
                    DecodeError::format(field, format!("element {index}: {reason}"))
                }
                other => other,
            })
        })
        .collect()
}

/// Typed, field-name-aware access to the members of a JSON object.
///
/// Every accessor reports failures against the JSON field name, so the error names the key as
/// the endpoint spelled it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    /// Wraps `value`, which must be a JSON object. `what` names the record for error reporting.
    pub(crate) fn new(value: &'a Value, what: &'static str) -> DecodeResult<Self> {
        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(DecodeError::format(
                ROOT_FIELD,
                format!("expected {what} object, found {}", json_type_name(other)),
            )),
        }
    }

    /// Returns the raw token for a required field.
    pub(crate) fn required(&self, field: &'static str) -> DecodeResult<&'a Value> {
        self.object.get(field).ok_or(DecodeError::MissingField(field))
    }

    /// Returns the raw token for a nullable field; `null` and an absent key are both [`None`].
    pub(crate) fn optional(&self, field: &'static str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    pub(crate) fn hex_int(&self, field: &'static str) -> DecodeResult<u64> {
        let value = self.required(field)?;
        HexInt::from_value(value).map(HexInt::get).map_err(|err| DecodeError::hex(field, err))
    }

    pub(crate) fn opt_hex_int(&self, field: &'static str) -> DecodeResult<Option<u64>> {
        self.optional(field)
            .map(|value| {
                HexInt::from_value(value).map(HexInt::get).map_err(|err| DecodeError::hex(field, err))
            })
            .transpose()
    }

    pub(crate) fn hex_big(&self, field: &'static str) -> DecodeResult<BigUint> {
        let value = self.required(field)?;
        HexBig::from_value(value).map(HexBig::into_inner).map_err(|err| DecodeError::hex(field, err))
    }

    pub(crate) fn opt_hex_big(&self, field: &'static str) -> DecodeResult<Option<BigUint>> {
        self.optional(field)
            .map(|value| {
                HexBig::from_value(value)
                    .map(HexBig::into_inner)
                    .map_err(|err| DecodeError::hex(field, err))
            })
            .transpose()
    }

    pub(crate) fn hex_string(&self, field: &'static str) -> DecodeResult<String> {
        hex_string(field, self.required(field)?)
    }

    pub(crate) fn opt_hex_string(&self, field: &'static str) -> DecodeResult<Option<String>> {
        self.optional(field).map(|value| hex_string(field, value)).transpose()
    }

    /// Reads a literal JSON boolean; quoted or numeric encodings are rejected.
    pub(crate) fn bool(&self, field: &'static str) -> DecodeResult<bool> {
        let value = self.required(field)?;
        value.as_bool().ok_or_else(|| {
            DecodeError::format(field, format!("expected a boolean, found {}", json_type_name(value)))
        })
    }

    /// Reads a required array field.
    pub(crate) fn array(&self, field: &'static str) -> DecodeResult<&'a [Value]> {
        let value = self.required(field)?;
        value.as_array().map(Vec::as_slice).ok_or_else(|| {
            DecodeError::format(field, format!("expected an array, found {}", json_type_name(value)))
        })
    }

    /// Reads an array field where `null` or an absent key means "no elements".
    pub(crate) fn opt_array(&self, field: &'static str) -> DecodeResult<&'a [Value]> {
        match self.optional(field) {
            None => Ok(&[][..]),
            Some(value) => value.as_array().map(Vec::as_slice).ok_or_else(|| {
                DecodeError::format(
                    field,
                    format!("expected an array, found {}", json_type_name(value)),
                )
            }),
        }
    }

    pub(crate) fn hex_strings(&self, field: &'static str) -> DecodeResult<Vec<String>> {
        hex_strings(field, self.array(field)?)
    }

    pub(crate) fn records<T: FromJson>(&self, field: &'static str) -> DecodeResult<Vec<T>> {
        records(field, self.array(field)?)
    }
}

/// Implements [`serde::Deserialize`] for types that implement [`FromJson`].
macro_rules! impl_deserialize_from_json {
    ($($ty:ty),+ $(,)?) => {$(
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize<'de>>::deserialize(deserializer)?;
                <$ty as $crate::FromJson>::from_json(&value).map_err(serde::de::Error::custom)
            }
        }
    )+};
}
pub(crate) use impl_deserialize_from_json;
