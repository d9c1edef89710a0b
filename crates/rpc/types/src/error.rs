//! Error types for record decoding.

use crate::RpcErrorObject;
use ethrpc_serde::HexError;
use thiserror::Error;

/// Field name reported when the failing token is the decoded value itself rather than a field
/// of an enclosing object.
pub const ROOT_FIELD: &str = "$";

/// Failures produced while decoding a scalar or record from JSON.
///
/// Decoding is atomic: any of these means no value was produced.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The token has the wrong JSON type, lacks the `0x` prefix, or contains invalid hex digits.
    #[error("invalid `{field}`: {reason}")]
    Format {
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with the token.
        reason: String,
    },
    /// A fixed-width quantity does not fit in 64 bits.
    #[error("`{field}` does not fit in 64 bits")]
    Overflow {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A required field is absent from the object.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A record nested inside an array failed to decode.
    #[error("failed to decode `{field}[{index}]`: {source}")]
    Nested {
        /// Name of the array field holding the record.
        field: &'static str,
        /// Position of the record within the array.
        index: usize,
        /// The failure of the nested record.
        source: Box<DecodeError>,
    },
    /// The input bytes are not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Returns a new [`Format`](Self::Format) error for `field`.
    pub fn format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Format { field, reason: reason.into() }
    }

    /// Classifies a scalar [`HexError`] raised while decoding `field`.
    pub fn hex(field: &'static str, err: HexError) -> Self {
        if err.is_overflow() { Self::Overflow { field } } else { Self::format(field, err.to_string()) }
    }

    /// Wraps the failure of the record at `field[index]`.
    pub fn nested(field: &'static str, index: usize, err: Self) -> Self {
        Self::Nested { field, index, source: Box::new(err) }
    }

    /// Follows [`Nested`](Self::Nested) wrappers down to the failure that started the chain.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A [`Result`] alias for decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failures produced while unwrapping a JSON-RPC response.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The endpoint answered with an error object.
    #[error("endpoint returned error {}: {}", .0.code, .0.message)]
    Endpoint(RpcErrorObject),
    /// The envelope or its result could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(err))
    }
}
