//! Logging arguments and tracing subscriber setup.

use crate::{CliError, CliResult};
use clap::{ArgAction, Args};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Logging arguments, flattened into each binary's CLI.
#[derive(Args, Default, Clone, Debug)]
pub struct LogArgs {
    /// Verbosity level (0-4). Each `-v` raises the level, starting from errors only.
    #[arg(long = "verbosity", short = 'v', action = ArgAction::Count, global = true)]
    pub verbosity: u8,
    /// Disables ANSI colors in log output.
    #[arg(long = "log.no-color", global = true, env = "ETHRPC_LOG_NO_COLOR")]
    pub no_color: bool,
    /// Filter directives in `RUST_LOG` syntax. Takes precedence over the verbosity level.
    #[arg(long = "log.filter", global = true, env = "RUST_LOG")]
    pub filter: Option<String>,
}

impl LogArgs {
    /// Installs the global tracing subscriber described by these arguments.
    pub fn init_tracing_subscriber(&self) -> CliResult<()> {
        let filter = self.filter.as_deref().map(EnvFilter::try_new).transpose()?;
        init_tracing_subscriber(self.verbosity, !self.no_color, filter)
    }
}

/// Maps a `-v` count to the default log level.
pub const fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// When `env_filter` is [`None`], everything at or above [`verbosity_level`] is logged.
pub fn init_tracing_subscriber(
    verbosity: u8,
    ansi: bool,
    env_filter: Option<EnvFilter>,
) -> CliResult<()> {
    let filter = env_filter.unwrap_or_else(|| {
        EnvFilter::builder().with_default_directive(verbosity_level(verbosity).into()).parse_lossy("")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::TracingInit)?;

    tracing::debug!(target: "ethrpc::cli", verbosity, ansi, "Tracing subscriber installed");
    Ok(())
}
