//! The payload kinds understood by the binary.

use clap::ValueEnum;
use ethrpc_types::{
    Block, DecodeResult, FromJson, HexBig, HexInt, Log, Syncing, Transaction, TransactionReceipt,
};
use serde_json::Value;
use std::fmt::Debug;

/// What the JSON payload holds, named after the RPC methods that return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DecodeKind {
    /// A quantity that fits in 64 bits, e.g. `eth_blockNumber`.
    HexInt,
    /// A quantity of any size, e.g. `eth_getBalance`.
    HexBig,
    /// A single event log.
    Log,
    /// An array of event logs, e.g. `eth_getLogs`.
    Logs,
    /// A transaction receipt, e.g. `eth_getTransactionReceipt`.
    Receipt,
    /// A transaction, e.g. `eth_getTransactionByHash`.
    Transaction,
    /// A block, e.g. `eth_getBlockByNumber`.
    Block,
    /// The result of `eth_syncing`.
    Syncing,
}

impl DecodeKind {
    /// Decodes `value` as this kind and renders it for display.
    ///
    /// Quantities render in decimal, records in their [`Debug`] form.
    pub(crate) fn render(self, value: &Value, pretty: bool) -> DecodeResult<String> {
        match self {
            Self::HexInt => HexInt::from_json(value).map(|v| v.to_string()),
            Self::HexBig => HexBig::from_json(value).map(|v| v.to_string()),
            Self::Log => render::<Log>(value, pretty),
            Self::Logs => render::<Vec<Log>>(value, pretty),
            Self::Receipt => render::<TransactionReceipt>(value, pretty),
            Self::Transaction => render::<Transaction>(value, pretty),
            Self::Block => render::<Block>(value, pretty),
            Self::Syncing => render::<Syncing>(value, pretty),
        }
    }
}

fn render<T: FromJson + Debug>(value: &Value, pretty: bool) -> DecodeResult<String> {
    let decoded = T::from_json(value)?;
    Ok(if pretty { format!("{decoded:#?}") } else { format!("{decoded:?}") })
}
