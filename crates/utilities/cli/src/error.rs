//! Error types for CLI utilities.

use std::error::Error;
use thiserror::Error;

/// Errors that can occur in CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The log filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber could not be installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingInit(Box<dyn Error + Send + Sync>),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
