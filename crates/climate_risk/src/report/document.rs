//! Exportable report document.
//!
//! A format-neutral list of titled sections. Sinks decide page layout; the
//! wording and order of lines is fixed here so that every export format says
//! the same thing.

use climate_core::types::Currency;
use serde::Serialize;

use super::ScenarioReport;

/// Document title.
pub const REPORT_TITLE: &str = "Climate Scenario Comparison Report";

/// File name stem used by every export format.
pub const REPORT_FILE_STEM: &str = "Climate_Scenario_Comparison_Report";

const EXPOSURE_HEADING: &str = "Uploaded Exposure Data:";

/// A heading followed by its lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportSection {
    /// Section heading
    pub heading: String,
    /// Body lines
    pub lines: Vec<String>,
}

/// Ordered document sections ready for a sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportDocument {
    /// Document title
    pub title: String,
    /// Context lines printed under the title (industry, generation time)
    pub preamble: Vec<String>,
    /// Scenario sections in selection order, then the exposure listing
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    /// Lay out a report.
    ///
    /// Monetary estimates only appear when the report carries exposure data;
    /// the exposure listing is appended once, after all scenario sections.
    pub fn from_report(report: &ScenarioReport, currency: Currency) -> Self {
        let mut sections: Vec<ReportSection> = report
            .summaries()
            .iter()
            .map(|summary| {
                let scenario = &summary.scenario;
                let mut lines = vec![
                    format!("  Description: {}", scenario.description()),
                    format!("  Temperature Pathway: {}", scenario.temperature_pathway()),
                    format!(
                        "  Carbon Price (2030): {} per tCO2e",
                        currency.label(scenario.carbon_price())
                    ),
                ];
                if let (Some(var), Some(loss)) = (
                    summary.metrics.estimated_transition_var,
                    summary.metrics.estimated_physical_loss,
                ) {
                    lines.push(format!(
                        "  Estimated Transition VaR: {}",
                        currency.format_millions(var)
                    ));
                    lines.push(format!(
                        "  Estimated Physical Risk Loss: {}",
                        currency.format_millions(loss)
                    ));
                }
                ReportSection {
                    heading: format!("Scenario: {}", scenario.name()),
                    lines,
                }
            })
            .collect();

        if let Some(dataset) = report.exposure() {
            let mut lines: Vec<String> = dataset
                .rows()
                .iter()
                .map(|row| {
                    format!(
                        "{}: {}M",
                        row.sector(),
                        currency.label(row.exposure_millions())
                    )
                })
                .collect();
            lines.push(format!(
                "Total Exposure: {}M",
                currency.label(dataset.total_exposure_millions())
            ));
            sections.push(ReportSection {
                heading: EXPOSURE_HEADING.to_string(),
                lines,
            });
        }

        Self {
            title: REPORT_TITLE.to_string(),
            preamble: Vec::new(),
            sections,
        }
    }

    /// Add a context line under the title.
    pub fn with_preamble_line(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    /// Title, preamble, and sections as one line sequence, blank-line separated.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![self.title.clone()];
        out.extend(self.preamble.iter().cloned());
        for section in &self.sections {
            out.push(String::new());
            out.push(section.heading.clone());
            out.extend(section.lines.iter().cloned());
        }
        out
    }

    /// Render as plain text.
    pub fn to_plain_text(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}
