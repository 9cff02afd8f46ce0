//! Report output destinations.
//!
//! Sinks turn a [`ReportDocument`] into a file named
//! `Climate_Scenario_Comparison_Report.<ext>` in an output directory.
//!
//! Every sink writes into a temporary file in the target directory and
//! renames it into place only once the content is complete. If rendering or
//! writing fails, the temporary file is removed when it goes out of scope and
//! no partial report is left behind.

#![deny(missing_docs)]

mod error;
mod file_writer;
mod pdf_writer;

pub use error::SinkError;
pub use file_writer::FileWriter;
pub use pdf_writer::PdfWriter;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use climate_risk::report::{ReportDocument, REPORT_FILE_STEM};
use serde::{Deserialize, Serialize};

/// Report output destination trait
pub trait ReportSink: Send + Sync {
    /// Format produced by this sink
    fn format(&self) -> ReportFormat;

    /// Write a document, returning the final path
    fn write(&self, document: &ReportDocument) -> Result<PathBuf, SinkError>;
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// PDF document
    Pdf,
    /// Plain text
    Text,
    /// JSON
    Json,
}

impl ReportFormat {
    /// Get file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Get MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Text => "text/plain",
            ReportFormat::Json => "application/json",
        }
    }

    /// Fixed export file name for this format.
    pub fn file_name(&self) -> String {
        format!("{}.{}", REPORT_FILE_STEM, self.extension())
    }

    /// Sink writing this format into `output_dir`.
    pub fn sink(&self, output_dir: impl AsRef<Path>) -> Box<dyn ReportSink> {
        match self {
            ReportFormat::Pdf => Box::new(PdfWriter::new(output_dir)),
            ReportFormat::Text | ReportFormat::Json => {
                Box::new(FileWriter::new(output_dir, *self))
            }
        }
    }
}

impl FromStr for ReportFormat {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(SinkError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write bytes to `output_dir/file_name` through a scoped temporary file.
pub(crate) fn persist_atomically(
    output_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, SinkError> {
    fs::create_dir_all(output_dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".report-")
        .suffix(".tmp")
        .tempfile_in(output_dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let path = output_dir.join(file_name);
    tmp.persist(&path).map_err(|e| SinkError::Io(e.error))?;
    Ok(path)
}
