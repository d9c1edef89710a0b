//! Contains the decode CLI.

use crate::kind::DecodeKind;
use anyhow::{Context, Result};
use clap::Parser;
use ethrpc_cli::{LogArgs, cli_styles};
use ethrpc_types::{RpcError, RpcResponse};
use serde_json::Value;
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Decodes an Ethereum JSON-RPC payload and prints the typed value.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, styles = cli_styles(), long_about = None)]
pub(crate) struct Cli {
    /// Logging arguments.
    #[command(flatten)]
    pub(crate) log: LogArgs,
    /// The kind of value the payload holds.
    #[arg(value_enum, env = "ETHRPC_DECODE_KIND")]
    pub(crate) kind: DecodeKind,
    /// File holding the JSON payload. Reads stdin when omitted or `-`.
    pub(crate) input: Option<PathBuf>,
    /// Treat the payload as a JSON-RPC response and decode its `result`.
    #[arg(long, short = 'e', env = "ETHRPC_DECODE_ENVELOPE")]
    pub(crate) envelope: bool,
    /// Pretty-print decoded records.
    #[arg(long, short = 'p', env = "ETHRPC_DECODE_PRETTY")]
    pub(crate) pretty: bool,
}

impl Cli {
    /// Runs the CLI.
    pub(crate) fn run(self) -> Result<()> {
        self.log.init_tracing_subscriber()?;

        let bytes = self.read_input()?;
        debug!(
            target: "ethrpc::decode",
            kind = ?self.kind,
            bytes = bytes.len(),
            envelope = self.envelope,
            "Decoding payload"
        );

        let output = self.decode(&bytes)?;
        println!("{output}");
        Ok(())
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => {
                std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes).context("failed to read stdin")?;
                Ok(bytes)
            }
        }
    }

    /// Decodes raw payload bytes into the rendered output line.
    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<String, RpcError> {
        let value: Value = if self.envelope {
            let value = RpcResponse::from_slice(bytes)?.into_result()?;
            if value.is_null() {
                info!(target: "ethrpc::decode", "Endpoint returned a null result");
                return Ok("null".to_string());
            }
            value
        } else {
            serde_json::from_slice(bytes)?
        };
        Ok(self.kind.render(&value, self.pretty)?)
    }
}
