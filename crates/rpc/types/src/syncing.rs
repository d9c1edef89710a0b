//! `eth_syncing` results.

use crate::{
    DecodeError, DecodeResult, FromJson, ROOT_FIELD,
    decode::{ObjectReader, impl_deserialize_from_json},
};
use ethrpc_serde::json_type_name;
use serde_json::Value;

/// Block range progress reported while an endpoint is syncing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncProgress {
    /// Block at which the import started.
    pub starting_block: u64,
    /// Block currently being imported.
    pub current_block: u64,
    /// Estimated highest block.
    pub highest_block: u64,
}

/// Result of `eth_syncing`: the literal `false`, or a progress object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Syncing {
    /// The endpoint is fully synced.
    #[default]
    NotSyncing,
    /// The endpoint is catching up.
    InProgress(SyncProgress),
}

impl Syncing {
    /// Returns `true` if the endpoint is still syncing.
    pub const fn is_syncing(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }
}

impl FromJson for Syncing {
    fn from_json(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Bool(false) => Ok(Self::NotSyncing),
            Value::Object(_) => {
                let reader = ObjectReader::new(value, "a sync status")?;
                Ok(Self::InProgress(SyncProgress {
                    starting_block: reader.hex_int("startingBlock")?,
                    current_block: reader.hex_int("currentBlock")?,
                    highest_block: reader.hex_int("highestBlock")?,
                }))
            }
            Value::Bool(true) => {
                Err(DecodeError::format(ROOT_FIELD, "`true` is not a valid sync status"))
            }
            other => Err(DecodeError::format(
                ROOT_FIELD,
                format!("expected `false` or a sync status object, found {}", json_type_name(other)),
            )),
        }
    }
}

impl_deserialize_from_json!(Syncing);
