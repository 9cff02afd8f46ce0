//! Chart series built from a [`ScenarioReport`].
//!
//! Only data is produced here; drawing is left to whichever renderer
//! consumes the series.

use std::f64::consts::PI;

use climate_core::types::{Currency, RiskDimension};
use serde::Serialize;

use super::ScenarioReport;

const RADAR_TITLE: &str = "Climate Risk Profile Comparison";
const BAR_TITLE: &str = "Transition vs Physical Risk by Scenario";
const TRANSITION_VAR_LABEL: &str = "Transition VaR";
const PHYSICAL_LOSS_LABEL: &str = "Physical Risk Loss";

/// Axis angles in radians, evenly spaced, with the first angle repeated to close the ring.
pub fn radar_angles() -> Vec<f64> {
    let n = RiskDimension::ALL.len();
    let mut angles: Vec<f64> = (0..n).map(|k| 2.0 * PI * k as f64 / n as f64).collect();
    angles.push(angles[0]);
    angles
}

/// One closed ring of a radar chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarSeries {
    /// Legend label (scenario name)
    pub label: String,
    /// Scores per axis, first score repeated at the end
    pub values: Vec<f64>,
}

/// Risk profile comparison, one ring per selected scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarChart {
    /// Chart title
    pub title: String,
    /// Axis labels in risk dimension order
    pub axes: Vec<&'static str>,
    /// Axis angles (closed, see [`radar_angles`])
    pub angles: Vec<f64>,
    /// Rings in selection order
    pub series: Vec<RadarSeries>,
}

impl RadarChart {
    /// Build the radar series for every selected scenario.
    pub fn from_report(report: &ScenarioReport) -> Self {
        Self {
            title: RADAR_TITLE.to_string(),
            axes: RiskDimension::ALL.iter().map(|d| d.label()).collect(),
            angles: radar_angles(),
            series: report
                .summaries()
                .iter()
                .map(|s| RadarSeries {
                    label: s.scenario.name().to_string(),
                    values: s.scenario.risk_profile().closed_ring(),
                })
                .collect(),
        }
    }
}

/// One bar per category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarSeries {
    /// Legend label
    pub label: String,
    /// Values in millions, one per category
    pub values: Vec<f64>,
}

/// Grouped bars: one group per scenario, transition VaR next to physical loss.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    /// Chart title
    pub title: String,
    /// Y axis label, e.g. `AUD ($M)`
    pub y_label: String,
    /// Scenario names in selection order
    pub categories: Vec<String>,
    /// Transition VaR series then physical loss series
    pub series: Vec<BarSeries>,
}

impl BarChart {
    /// Build the bar series, or `None` when the report has no exposure data.
    pub fn from_report(report: &ScenarioReport, currency: Currency) -> Option<Self> {
        report.exposure()?;

        let transition_var = report
            .summaries()
            .iter()
            .map(|s| s.metrics.estimated_transition_var)
            .collect::<Option<Vec<_>>>()?;
        let physical_loss = report
            .summaries()
            .iter()
            .map(|s| s.metrics.estimated_physical_loss)
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            title: BAR_TITLE.to_string(),
            y_label: currency.axis_label(),
            categories: report
                .scenario_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            series: vec![
                BarSeries {
                    label: TRANSITION_VAR_LABEL.to_string(),
                    values: transition_var,
                },
                BarSeries {
                    label: PHYSICAL_LOSS_LABEL.to_string(),
                    values: physical_loss,
                },
            ],
        })
    }
}
