//! CLI error types

use pricer_models::analytical::AnalyticalError;
use pricer_risk::export::ExportError;
use thiserror::Error;

/// Errors surfaced by the `greeks` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Pricing or sweep error
    #[error("Pricing error: {0}")]
    Analytical(#[from] AnalyticalError),

    /// Table export or plotting error
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Console report could not be formatted
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
