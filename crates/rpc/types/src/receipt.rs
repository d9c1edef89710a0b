//! Transaction receipts.

use crate::{
    DecodeResult, FromJson, Log,
    decode::{ObjectReader, impl_deserialize_from_json},
};
use serde_json::Value;

/// The post-execution summary of a transaction, as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Hash of the block containing the transaction.
    pub block_hash: String,
    /// Number of the block containing the transaction.
    pub block_number: u64,
    /// Address of the created contract, or [`None`] if the transaction did not create one.
    pub contract_address: Option<String>,
    /// Gas used by this and all preceding transactions in the block.
    pub cumulative_gas_used: u64,
    /// Gas used by this transaction alone.
    pub gas_used: u64,
    /// Logs emitted by the transaction, in emission order.
    pub logs: Vec<Log>,
    /// Bloom filter over the emitted logs.
    pub logs_bloom: String,
    /// Post-transaction state root.
    pub root: String,
    /// Hash of the transaction.
    pub transaction_hash: String,
    /// Position of the transaction within the block.
    pub transaction_index: u64,
}

impl TransactionReceipt {
    /// Returns `true` if the transaction deployed a contract.
    pub const fn created_contract(&self) -> bool {
        self.contract_address.is_some()
    }
}

impl FromJson for TransactionReceipt {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        let reader = ObjectReader::new(value, "a transaction receipt")?;
        let receipt = Self {
            block_hash: reader.hex_string("blockHash")?,
            block_number: reader.hex_int("blockNumber")?,
            contract_address: reader.opt_hex_string("contractAddress")?,
            cumulative_gas_used: reader.hex_int("cumulativeGasUsed")?,
            gas_used: reader.hex_int("gasUsed")?,
            logs: reader.records("logs")?,
            logs_bloom: reader.hex_string("logsBloom")?,
            root: reader.hex_string("root")?,
            transaction_hash: reader.hex_string("transactionHash")?,
            transaction_index: reader.hex_int("transactionIndex")?,
        };
        trace!(
            target: "ethrpc::decode",
            tx = %receipt.transaction_hash,
            logs = receipt.logs.len(),
            "Decoded transaction receipt"
        );
        Ok(receipt)
    }
}

impl_deserialize_from_json!(TransactionReceipt);
