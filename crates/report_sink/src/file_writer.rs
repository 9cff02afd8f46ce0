//! File writer for text and JSON report output.

use super::{persist_atomically, ReportFormat, ReportSink, SinkError};
use climate_risk::report::ReportDocument;
use std::path::{Path, PathBuf};
use tracing::info;

/// File writer for text-based reports
pub struct FileWriter {
    /// Output directory
    output_dir: PathBuf,
    /// Text or JSON
    format: ReportFormat,
}

impl FileWriter {
    /// Create a new file writer.
    ///
    /// A [`ReportFormat::Pdf`] request is written as plain text; use
    /// [`crate::PdfWriter`] for PDF output.
    pub fn new(output_dir: impl AsRef<Path>, format: ReportFormat) -> Self {
        let format = match format {
            ReportFormat::Pdf => ReportFormat::Text,
            other => other,
        };
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            format,
        }
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, SinkError> {
        match self.format {
            ReportFormat::Json => Ok(serde_json::to_vec_pretty(document)?),
            _ => Ok(document.to_plain_text().into_bytes()),
        }
    }
}

impl ReportSink for FileWriter {
    fn format(&self) -> ReportFormat {
        self.format
    }

    fn write(&self, document: &ReportDocument) -> Result<PathBuf, SinkError> {
        let content = self.render(document)?;
        let path = persist_atomically(&self.output_dir, &self.format.file_name(), &content)?;

        info!(
            path = %path.display(),
            format = %self.format,
            size = content.len(),
            "Report written to file"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_core::catalog::{ScenarioCatalog, NET_ZERO_2050};
    use climate_core::types::Currency;
    use climate_risk::ReportAssembler;
    use std::fs;

    fn document() -> ReportDocument {
        let catalog = ScenarioCatalog::ngfs();
        let report = ReportAssembler::new(&catalog)
            .build_summaries(&[NET_ZERO_2050], None)
            .unwrap();
        ReportDocument::from_report(&report, Currency::AUD)
    }

    #[test]
    fn test_text_writer() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), ReportFormat::Text);

        let path = writer.write(&document()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Climate_Scenario_Comparison_Report.txt");

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Climate Scenario Comparison Report\n"));
        assert!(text.contains("Scenario: Net Zero 2050"));
    }

    #[test]
    fn test_json_writer() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), ReportFormat::Json);

        let path = writer.write(&document()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["title"], "Climate Scenario Comparison Report");
        assert_eq!(value["sections"][0]["heading"], "Scenario: Net Zero 2050");
    }

    #[test]
    fn test_pdf_request_falls_back_to_text() {
        let writer = FileWriter::new("reports", ReportFormat::Pdf);
        assert_eq!(writer.format(), ReportFormat::Text);
        assert_eq!(writer.output_dir(), Path::new("reports"));
    }

    #[test]
    fn test_rewrite_replaces_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), ReportFormat::Text);
        writer.write(&document()).unwrap();
        writer.write(&document()).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
