//! Event logs.

use crate::{
    DecodeResult, FromJson,
    decode::{ObjectReader, hex_strings, impl_deserialize_from_json},
};
use serde_json::Value;

/// A single event emitted during transaction execution, as returned by `eth_getLogs` or
/// embedded in a [`TransactionReceipt`](crate::TransactionReceipt).
///
/// Hex string fields are kept exactly as the endpoint sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log {
    /// Address of the emitting contract.
    pub address: String,
    /// Indexed event topics, in emission order.
    pub topics: Vec<String>,
    /// Non-indexed event payload.
    pub data: String,
    /// Number of the block containing the log.
    pub block_number: u64,
    /// Hash of the block containing the log.
    pub block_hash: String,
    /// Position of the emitting transaction within the block.
    pub transaction_index: u64,
    /// Hash of the emitting transaction.
    pub transaction_hash: String,
    /// Position of the log within the block.
    pub log_index: u64,
    /// Whether the log was dropped by a chain reorganization.
    pub removed: bool,
}

impl FromJson for Log {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        let reader = ObjectReader::new(value, "a log")?;
        Ok(Self {
            address: reader.hex_string("address")?,
            topics: hex_strings("topics", reader.opt_array("topics")?)?,
            data: reader.hex_string("data")?,
            block_number: reader.hex_int("blockNumber")?,
            block_hash: reader.hex_string("blockHash")?,
            transaction_index: reader.hex_int("transactionIndex")?,
            transaction_hash: reader.hex_string("transactionHash")?,
            log_index: reader.hex_int("logIndex")?,
            removed: reader.bool("removed")?,
        })
    }
}

impl_deserialize_from_json!(Log);
