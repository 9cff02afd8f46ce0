//! Export error types.

use thiserror::Error;

/// Errors that fail an export without touching session state.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Temporary or final file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF rendering failed.
    #[error("PDF rendering error: {0}")]
    Pdf(String),

    /// JSON serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Requested format is not supported.
    #[error("Unsupported report format: {0}. Supported: pdf, text, json")]
    UnsupportedFormat(String),
}
