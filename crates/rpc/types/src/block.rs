//! Blocks.

use crate::{
    DecodeError, DecodeResult, FromJson, Transaction,
    decode::{ObjectReader, hex_strings, impl_deserialize_from_json, records},
};
use ethrpc_serde::{BigUint, json_type_name};
use serde_json::Value;

/// The transactions of a [`Block`].
///
/// `eth_getBlockByNumber` returns either transaction hashes or full transaction objects,
/// depending on the `full` flag of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTransactions {
    /// Only the transaction hashes.
    Hashes(Vec<String>),
    /// Fully decoded transactions.
    Full(Vec<Transaction>),
}

impl Default for BlockTransactions {
    fn default() -> Self {
        Self::Hashes(Vec::new())
    }
}

impl BlockTransactions {
    /// Returns the number of transactions.
    pub const fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(txs) => txs.len(),
        }
    }

    /// Returns `true` if the block holds no transactions.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the transaction hashes regardless of the representation.
    pub fn hashes(&self) -> Vec<&str> {
        match self {
            Self::Hashes(hashes) => hashes.iter().map(String::as_str).collect(),
            Self::Full(txs) => txs.iter().map(|tx| tx.hash.as_str()).collect(),
        }
    }

    /// Decodes the `transactions` array, picking the representation from its first element.
    fn decode(items: &[Value]) -> DecodeResult<Self> {
        const FIELD: &str = "transactions";
        match items.first() {
            None | Some(Value::String(_)) => hex_strings(FIELD, items).map(Self::Hashes),
            Some(Value::Object(_)) => records(FIELD, items).map(Self::Full),
            Some(other) => Err(DecodeError::format(
                FIELD,
                format!(
                    "expected transaction hashes or objects, found {}",
                    json_type_name(other)
                ),
            )),
        }
    }
}

/// A block as returned by `eth_getBlockByNumber` / `eth_getBlockByHash`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Block number.
    pub number: u64,
    /// Block hash.
    pub hash: String,
    /// Hash of the parent block.
    pub parent_hash: String,
    /// Proof-of-work nonce.
    pub nonce: String,
    /// Hash of the uncles list.
    pub sha3_uncles: String,
    /// Bloom filter over the logs of the block.
    pub logs_bloom: String,
    /// Root of the transaction trie.
    pub transactions_root: String,
    /// Root of the final state trie.
    pub state_root: String,
    /// Beneficiary of the block rewards.
    pub miner: String,
    /// Difficulty of the block.
    pub difficulty: BigUint,
    /// Total chain difficulty up to this block. Post-merge endpoints may omit it.
    pub total_difficulty: Option<BigUint>,
    /// Extra data field.
    pub extra_data: String,
    /// Size of the block in bytes.
    pub size: u64,
    /// Gas limit of the block.
    pub gas_limit: u64,
    /// Gas used by all transactions in the block.
    pub gas_used: u64,
    /// Unix timestamp of the block.
    pub timestamp: u64,
    /// Hashes of the uncle blocks.
    pub uncles: Vec<String>,
    /// Transactions in the block.
    pub transactions: BlockTransactions,
}

impl FromJson for Block {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        let reader = ObjectReader::new(value, "a block")?;
        Ok(Self {
            number: reader.hex_int("number")?,
            hash: reader.hex_string("hash")?,
            parent_hash: reader.hex_string("parentHash")?,
            nonce: reader.hex_string("nonce")?,
            sha3_uncles: reader.hex_string("sha3Uncles")?,
            logs_bloom: reader.hex_string("logsBloom")?,
            transactions_root: reader.hex_string("transactionsRoot")?,
            state_root: reader.hex_string("stateRoot")?,
            miner: reader.hex_string("miner")?,
            difficulty: reader.hex_big("difficulty")?,
            total_difficulty: reader.opt_hex_big("totalDifficulty")?,
            extra_data: reader.hex_string("extraData")?,
            size: reader.hex_int("size")?,
            gas_limit: reader.hex_int("gasLimit")?,
            gas_used: reader.hex_int("gasUsed")?,
            timestamp: reader.hex_int("timestamp")?,
            uncles: reader.hex_strings("uncles")?,
            transactions: BlockTransactions::decode(reader.array("transactions")?)?,
        })
    }
}

impl_deserialize_from_json!(Block);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TRANSACTION;
    use serde_json::json;

    fn block(transactions: Value) -> Value {
        json!({
            "number": "0x1b4",
            "hash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
            "parentHash": "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54",
            "nonce": "0x689056015818adbe",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "logsBloom": "0x00",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "stateRoot": "0xddc8b0234c2e0cad087c8b389aa7ef01f7d79b2570bccb77ce48648aa61c904d",
            "miner": "0xbb7b8287f3f0a933474a79eae42cbca977791171",
            "difficulty": "0x4ea3f27bc",
            "totalDifficulty": "0x78ed983323d",
            "extraData": "0x476574682f4c5649562f76312e302e302f6c696e75782f676f312e342e32",
            "size": "0x220",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "timestamp": "0x55ba467c",
            "uncles": [],
            "transactions": transactions,
        })
    }

    #[test]
    fn test_decode_block_with_hashes() {
        let value = block(json!([
            "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
            "0xecd8a21609fa852c08249f6c767b7097481da34b9f8d2aae70067918955b4e69"
        ]));
        let block = Block::from_json(&value).unwrap();

        assert_eq!(block.number, 436);
        assert_eq!(block.difficulty, BigUint::from(21109876668u64));
        assert_eq!(block.total_difficulty, Some(BigUint::from(8310116004413u64)));
        assert_eq!(block.size, 544);
        assert_eq!(block.gas_limit, 5000);
        assert_eq!(block.gas_used, 0);
        assert_eq!(block.timestamp, 1438271100);
        assert!(block.uncles.is_empty());
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(
            block.transactions.hashes(),
            [
                "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
                "0xecd8a21609fa852c08249f6c767b7097481da34b9f8d2aae70067918955b4e69"
            ]
        );
    }

    #[test]
    fn test_decode_block_with_full_transactions() {
        let tx: Value = serde_json::from_str(TRANSACTION).unwrap();
        let block = Block::from_json(&block(json!([tx]))).unwrap();

        match &block.transactions {
            BlockTransactions::Full(txs) => {
                assert_eq!(txs.len(), 1);
                assert_eq!(txs[0], Transaction::from_json_str(TRANSACTION).unwrap());
            }
            other => panic!("expected full transactions, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_transactions_are_hashes() {
        let block = Block::from_json(&block(json!([]))).unwrap();
        assert_eq!(block.transactions, BlockTransactions::Hashes(vec![]));
        assert!(block.transactions.is_empty());
    }

    #[test]
    fn test_len_is_const() {
        const fn total(a: &BlockTransactions, b: &BlockTransactions) -> usize {
            a.len() + b.len()
        }

        let hashes = BlockTransactions::Hashes(vec!["0xc6ef".to_string()]);
        let empty = BlockTransactions::default();
        assert_eq!(total(&hashes, &empty), 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mixed_transactions_rejected() {
        let tx: Value = serde_json::from_str(TRANSACTION).unwrap();
        let value =
            block(json!(["0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b", tx.clone()]));
        let err = Block::from_json(&value).unwrap_err();
        assert!(matches!(err, DecodeError::Format { field: "transactions", .. }), "{err}");

        let value = block(json!([tx, "0xc6ef"]));
        let err = Block::from_json(&value).unwrap_err();
        assert!(matches!(err, DecodeError::Nested { field: "transactions", index: 1, .. }), "{err}");
    }

    #[test]
    fn test_total_difficulty_optional() {
        let mut value = block(json!([]));
        value.as_object_mut().unwrap().remove("totalDifficulty");
        let block = Block::from_json(&value).unwrap();
        assert_eq!(block.total_difficulty, None);
    }

    #[test]
    fn test_numeric_transactions_rejected() {
        let err = Block::from_json(&block(json!([1, 2]))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid `transactions`: expected transaction hashes or objects, found a number"
        );
    }
}
