//! Analyze command implementation
//!
//! Prints the scenario comparison: per-scenario estimates, radar series,
//! bar series (only with exposure data) and the exposure listing.

use climate_core::types::{Currency, Industry};
use climate_risk::{BarChart, RadarChart, ScenarioReport};
use serde::Serialize;
use tracing::info;

use super::session::Context;
use super::{render_table, SelectionArgs};
use crate::{CliError, Result};

const NOT_APPLICABLE: &str = "n/a";

/// Machine-readable analysis output.
#[derive(Serialize)]
struct AnalysisOutput<'a> {
    industry: &'a Industry,
    currency: Currency,
    report: &'a ScenarioReport,
    radar: RadarChart,
    bar: Option<BarChart>,
}

/// Run the analyze command
pub fn run(ctx: &Context, args: &SelectionArgs, format: &str) -> Result<()> {
    let (inputs, report) = ctx.report(args)?;
    info!(
        industry = %inputs.industry(),
        scenarios = ?report.scenario_names(),
        "Analysing scenarios"
    );
    println!("{}", render(inputs.industry(), &report, ctx.currency, format)?);
    Ok(())
}

fn render(
    industry: &Industry,
    report: &ScenarioReport,
    currency: Currency,
    format: &str,
) -> Result<String> {
    match format {
        "json" => {
            let output = AnalysisOutput {
                industry,
                currency,
                report,
                radar: RadarChart::from_report(report),
                bar: BarChart::from_report(report, currency),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        "table" => Ok(render_tables(industry, report, currency)),
        other => Err(CliError::invalid_argument(format!(
            "Unknown format: {}. Supported: table, json",
            other
        ))),
    }
}

fn render_tables(industry: &Industry, report: &ScenarioReport, currency: Currency) -> String {
    let mut out = format!("Industry: {}\n\n", industry);

    let money = |value: Option<f64>| {
        value
            .map(|v| currency.format_millions(v))
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    };
    let summary_rows: Vec<Vec<String>> = report
        .summaries()
        .iter()
        .map(|s| {
            vec![
                s.scenario.name().to_string(),
                s.scenario.temperature_pathway().to_string(),
                currency.label(s.scenario.carbon_price()),
                money(s.metrics.estimated_transition_var),
                money(s.metrics.estimated_physical_loss),
            ]
        })
        .collect();
    out.push_str(&render_table(
        &[
            "Scenario",
            "Pathway",
            "Carbon Price (2030)",
            "Transition VaR",
            "Physical Loss",
        ],
        &summary_rows,
    ));

    let radar = RadarChart::from_report(report);
    out.push_str(&format!("\n{}\n", radar.title));
    let mut headers = vec!["Scenario"];
    headers.extend(radar.axes.iter().copied());
    let radar_rows: Vec<Vec<String>> = radar
        .series
        .iter()
        .map(|series| {
            let mut row = vec![series.label.clone()];
            // the last value closes the ring
            let axis_values = &series.values[..radar.axes.len()];
            row.extend(axis_values.iter().map(|v| format!("{}", v)));
            row
        })
        .collect();
    out.push_str(&render_table(&headers, &radar_rows));

    match (BarChart::from_report(report, currency), report.exposure()) {
        (Some(bar), Some(dataset)) => {
            out.push_str(&format!("\n{} [{}]\n", bar.title, bar.y_label));
            let mut headers = vec!["Scenario"];
            headers.extend(bar.series.iter().map(|s| s.label.as_str()));
            let bar_rows: Vec<Vec<String>> = bar
                .categories
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    let mut row = vec![category.clone()];
                    row.extend(bar.series.iter().map(|s| format!("{:.2}", s.values[i])));
                    row
                })
                .collect();
            out.push_str(&render_table(&headers, &bar_rows));

            out.push_str("\nUploaded Exposure Data\n");
            let exposure_rows: Vec<Vec<String>> = dataset
                .rows()
                .iter()
                .map(|row| {
                    vec![
                        row.sector().to_string(),
                        format!("{}M", currency.label(row.exposure_millions())),
                    ]
                })
                .collect();
            out.push_str(&render_table(&["Sector", "Exposure"], &exposure_rows));
            out.push_str(&format!(
                "Total Exposure: {}M\n",
                currency.label(dataset.total_exposure_millions())
            ));
        }
        _ => {
            out.push_str("\nNo exposure data uploaded; monetary estimates are not available.\n");
        }
    }

    out
}
