#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ethrpc-rs/ethrpc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod backtrace;

mod error;
pub use error::{CliError, CliResult};

pub mod log;
pub use log::{LogArgs, init_tracing_subscriber, verbosity_level};

mod styles;
pub use styles::cli_styles;
