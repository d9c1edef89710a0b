//! Transactions.

use crate::{
    DecodeResult, FromJson,
    decode::{ObjectReader, impl_deserialize_from_json},
};
use ethrpc_serde::BigUint;
use serde_json::Value;

/// A transaction as returned by `eth_getTransactionByHash` or inside a full block.
///
/// The block position fields are [`None`] while the transaction is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// Hash of the transaction.
    pub hash: String,
    /// Number of transactions sent by the sender before this one.
    pub nonce: u64,
    /// Hash of the containing block, [`None`] while pending.
    pub block_hash: Option<String>,
    /// Number of the containing block, [`None`] while pending.
    pub block_number: Option<u64>,
    /// Position within the containing block, [`None`] while pending.
    pub transaction_index: Option<u64>,
    /// Sender address.
    pub from: String,
    /// Recipient address, [`None`] for contract creation.
    pub to: Option<String>,
    /// Transferred value in wei.
    pub value: BigUint,
    /// Gas limit provided by the sender.
    pub gas: u64,
    /// Gas price in wei.
    pub gas_price: BigUint,
    /// Call data.
    pub input: String,
}

impl Transaction {
    /// Returns `true` if the transaction has not been included in a block yet.
    pub const fn is_pending(&self) -> bool {
        self.block_number.is_none()
    }
}

impl FromJson for Transaction {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        let reader = ObjectReader::new(value, "a transaction")?;
        Ok(Self {
            hash: reader.hex_string("hash")?,
            nonce: reader.hex_int("nonce")?,
            block_hash: reader.opt_hex_string("blockHash")?,
            block_number: reader.opt_hex_int("blockNumber")?,
            transaction_index: reader.opt_hex_int("transactionIndex")?,
            from: reader.hex_string("from")?,
            to: reader.opt_hex_string("to")?,
            value: reader.hex_big("value")?,
            gas: reader.hex_int("gas")?,
            gas_price: reader.hex_big("gasPrice")?,
            input: reader.hex_string("input")?,
        })
    }
}

impl_deserialize_from_json!(Transaction);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, test_utils::TRANSACTION};
    use serde_json::json;

    fn fixture() -> serde_json::Map<String, Value> {
        match serde_json::from_str(TRANSACTION).unwrap() {
            Value::Object(object) => object,
            _ => unreachable!("fixture is an object"),
        }
    }

    #[test]
    fn test_decode_transaction() {
        let tx = Transaction::from_json_str(TRANSACTION).unwrap();

        assert_eq!(tx.hash, "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b");
        assert_eq!(tx.nonce, 21);
        assert_eq!(tx.block_number, Some(5599));
        assert_eq!(tx.transaction_index, Some(65));
        assert_eq!(tx.to.as_deref(), Some("0x853f43d8a49eeb85d32cf465507dd71d507100c1"));
        assert_eq!(
            tx.value,
            BigUint::parse_bytes(b"23949082357483433297453", 10).unwrap()
        );
        assert_eq!(tx.gas, 50000);
        assert_eq!(tx.gas_price, BigUint::from(20_000_000_000u64));
        assert_eq!(tx.input, "0x68656c6c6f21");
        assert!(!tx.is_pending());
    }

    #[test]
    fn test_pending_transaction() {
        let mut object = fixture();
        object.insert("blockHash".to_string(), Value::Null);
        object.insert("blockNumber".to_string(), Value::Null);
        object.remove("transactionIndex");

        let tx = Transaction::from_json(&Value::Object(object)).unwrap();
        assert!(tx.is_pending());
        assert_eq!(tx.block_hash, None);
        assert_eq!(tx.transaction_index, None);
    }

    #[test]
    fn test_contract_creation() {
        let mut object = fixture();
        object.insert("to".to_string(), Value::Null);
        let tx = Transaction::from_json(&Value::Object(object)).unwrap();
        assert_eq!(tx.to, None);
    }

    #[test]
    fn test_value_never_overflows() {
        let mut object = fixture();
        object.insert("value".to_string(), json!(format!("0x{}", "f".repeat(80))));
        let tx = Transaction::from_json(&Value::Object(object)).unwrap();
        assert_eq!(tx.value.bits(), 320);
    }

    #[test]
    fn test_nullable_block_number_still_validated() {
        let mut object = fixture();
        object.insert("blockNumber".to_string(), json!(5599));
        let err = Transaction::from_json(&Value::Object(object)).unwrap_err();
        assert!(matches!(err, DecodeError::Format { field: "blockNumber", .. }), "{err}");
    }

    #[test]
    fn test_missing_value() {
        let mut object = fixture();
        object.remove("value");
        let err = Transaction::from_json(&Value::Object(object)).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField("value")), "{err}");
    }
}
