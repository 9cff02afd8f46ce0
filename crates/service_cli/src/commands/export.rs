//! Export command implementation
//!
//! Writes the comparison report document to the output directory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use climate_core::types::{Currency, Industry};
use climate_risk::{ReportDocument, ScenarioReport};
use report_sink::ReportFormat;
use tracing::info;

use super::session::Context;
use super::SelectionArgs;
use crate::Result;

/// Run the export command
pub fn run(
    ctx: &Context,
    args: &SelectionArgs,
    output_dir: Option<&Path>,
    format: &str,
) -> Result<PathBuf> {
    let format: ReportFormat = format.parse()?;
    let output_dir = output_dir.unwrap_or(ctx.config.output_dir.as_path());

    let (inputs, report) = ctx.report(args)?;
    let document = build_document(inputs.industry(), &report, ctx.currency, Local::now());

    info!(
        format = %format,
        output_dir = %output_dir.display(),
        sections = document.sections.len(),
        "Exporting report"
    );
    let path = format.sink(output_dir).write(&document)?;
    println!("Report written to {}", path.display());
    Ok(path)
}

/// Report document with the industry and generation time under the title.
pub fn build_document(
    industry: &Industry,
    report: &ScenarioReport,
    currency: Currency,
    generated: DateTime<Local>,
) -> ReportDocument {
    ReportDocument::from_report(report, currency)
        .with_preamble_line(format!("Industry: {}", industry))
        .with_preamble_line(format!(
            "Generated: {}",
            generated.format("%Y-%m-%d %H:%M %Z")
        ))
}
