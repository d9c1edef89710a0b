#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ethrpc-rs/ethrpc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::{DecodeError, DecodeResult, ROOT_FIELD, RpcError};

mod decode;
pub use decode::FromJson;

mod log;
pub use log::Log;

mod receipt;
pub use receipt::TransactionReceipt;

mod transaction;
pub use transaction::Transaction;

mod block;
pub use block::{Block, BlockTransactions};

mod syncing;
pub use syncing::{SyncProgress, Syncing};

mod response;
pub use response::{RpcErrorObject, RpcResponse};

pub use ethrpc_serde::{BigUint, HexBig, HexInt};

#[cfg(test)]
pub(crate) mod test_utils;
