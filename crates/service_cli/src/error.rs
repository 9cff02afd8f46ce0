//! Error types for the CLI.

use climate_core::types::{CatalogError, CurrencyError, ExposureError};
use report_sink::SinkError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario catalog or selection error
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Exposure file could not be used
    #[error("{0}")]
    Exposure(#[from] ExposureError),

    /// Unsupported currency
    #[error("{0}")]
    Currency(#[from] CurrencyError),

    /// Report export failed
    #[error("Export failed: {0}")]
    Export(#[from] SinkError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output could not be produced
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;
