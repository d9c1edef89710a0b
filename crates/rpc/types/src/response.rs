//! The JSON-RPC 2.0 response envelope.

use crate::{FromJson, RpcError};
use serde::Deserialize;
use serde_json::Value;

/// An error object returned by the endpoint in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorObject {
    /// Error code, e.g. `-32601` for an unknown method.
    pub code: i64,
    /// Human readable description.
    pub message: String,
    /// Additional endpoint specific detail, such as revert data.
    #[serde(default)]
    pub data: Option<Value>,
}

/// A JSON-RPC response as received from the transport.
///
/// The `result` stays an untyped [`Value`] until the caller picks the decoder for the method
/// it invoked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse {
    /// Protocol version, `"2.0"` for compliant endpoints.
    #[serde(default)]
    pub jsonrpc: String,
    /// Request identifier echoed by the endpoint.
    #[serde(default)]
    pub id: Value,
    /// The method result; [`None`] when absent or `null`.
    #[serde(default)]
    pub result: Option<Value>,
    /// The error object, if the call failed.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Parses an envelope from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RpcError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Returns the raw result, or the endpoint's error. A missing result is [`Value::Null`].
    pub fn into_result(self) -> Result<Value, RpcError> {
        if let Some(error) = self.error {
            debug!(target: "ethrpc::response", code = error.code, message = %error.message, "Endpoint returned an error");
            return Err(RpcError::Endpoint(error));
        }
        Ok(self.result.unwrap_or(Value::Null))
    }

    /// Decodes the result as `T`.
    pub fn decode_result<T: FromJson>(self) -> Result<T, RpcError> {
        Ok(T::from_json(&self.into_result()?)?)
    }

    /// Decodes the result as `T`, mapping a `null` result to [`None`].
    ///
    /// Lookups such as `eth_getTransactionReceipt` answer `null` for unknown or pending
    /// transactions.
    pub fn decode_optional_result<T: FromJson>(self) -> Result<Option<T>, RpcError> {
        match self.into_result()? {
            Value::Null => Ok(None),
            value => Ok(Some(T::from_json(&value)?)),
        }
    }
}
