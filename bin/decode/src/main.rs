//! Decodes Ethereum JSON-RPC payloads from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! curl -s -X POST -H 'content-type: application/json' \
//!     --data '{"jsonrpc":"2.0","id":1,"method":"eth_getTransactionReceipt","params":["0x..."]}' \
//!     $RPC_URL | ethrpc-decode receipt --envelope --pretty
//! ```

mod cli;
mod kind;

use clap::Parser;

fn main() {
    ethrpc_cli::backtrace::enable();

    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
