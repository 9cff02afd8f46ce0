//! Scenario report assembly.
//!
//! Every output surface (radar chart, bar chart, exported document) is built
//! from one [`ScenarioReport`], so legend order and section order always
//! match the caller's selection order.
//!
//! ## Architecture
//!
//! ```text
//! SessionInputs ──► ReportAssembler ──► ScenarioReport ──┬─► RadarChart
//!  (industry,        (catalog lookup,    (summaries +     ├─► BarChart (dataset only)
//!   selections,       RiskEstimator)      exposure once)  └─► ReportDocument
//!   dataset)
//! ```
//!
//! There is no cached state: each render is a full recomputation from the
//! session inputs.

mod charts;
mod document;

pub use charts::{radar_angles, BarChart, BarSeries, RadarChart, RadarSeries};
pub use document::{ReportDocument, ReportSection, REPORT_FILE_STEM, REPORT_TITLE};

use climate_core::catalog::ScenarioCatalog;
use climate_core::exposure::ExposureDataset;
use climate_core::types::{CatalogError, Industry, Scenario};
use serde::Serialize;

use crate::estimator::{DerivedMetrics, RiskEstimator};

/// The three inputs of a session, passed explicitly to every render.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionInputs {
    industry: Industry,
    selections: Vec<String>,
    dataset: Option<ExposureDataset>,
}

impl SessionInputs {
    /// Inputs with an explicit selection.
    pub fn new(
        industry: Industry,
        selections: Vec<String>,
        dataset: Option<ExposureDataset>,
    ) -> Self {
        Self {
            industry,
            selections,
            dataset,
        }
    }

    /// Inputs whose selection is pre-filled from the industry defaults.
    pub fn with_defaults(
        catalog: &ScenarioCatalog,
        industry: Industry,
        dataset: Option<ExposureDataset>,
    ) -> Self {
        let selections = catalog
            .defaults_for_industry(&industry)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self::new(industry, selections, dataset)
    }

    /// Selected industry.
    pub fn industry(&self) -> &Industry {
        &self.industry
    }

    /// Selected scenario names, in selection order.
    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    /// Uploaded dataset, if any.
    pub fn dataset(&self) -> Option<&ExposureDataset> {
        self.dataset.as_ref()
    }
}

/// One selected scenario with its derived metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioSummary {
    /// Scenario metadata and parameters
    pub scenario: Scenario,
    /// Derived monetary estimates
    pub metrics: DerivedMetrics,
}

/// Ordered scenario summaries plus the exposure listing, held once.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    summaries: Vec<ScenarioSummary>,
    exposure: Option<ExposureDataset>,
}

impl ScenarioReport {
    /// Summaries in selection order.
    pub fn summaries(&self) -> &[ScenarioSummary] {
        &self.summaries
    }

    /// Exposure rows appended at the end of the report.
    pub fn exposure(&self) -> Option<&ExposureDataset> {
        self.exposure.as_ref()
    }

    /// Scenario names in selection order.
    pub fn scenario_names(&self) -> Vec<&str> {
        self.summaries.iter().map(|s| s.scenario.name()).collect()
    }

    /// Whether no scenario is selected.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// Builds [`ScenarioReport`]s from catalog lookups and the estimator.
#[derive(Clone, Debug)]
pub struct ReportAssembler<'a> {
    catalog: &'a ScenarioCatalog,
    estimator: RiskEstimator,
}

impl<'a> ReportAssembler<'a> {
    /// Create an assembler over a catalog.
    pub fn new(catalog: &'a ScenarioCatalog) -> Self {
        Self {
            catalog,
            estimator: RiskEstimator::new(),
        }
    }

    /// Build summaries for the selected scenarios, preserving their order.
    ///
    /// # Errors
    ///
    /// Fails when the selection is invalid (see
    /// [`ScenarioCatalog::resolve_selection`]).
    pub fn build_summaries<S: AsRef<str>>(
        &self,
        selected: &[S],
        dataset: Option<&ExposureDataset>,
    ) -> Result<ScenarioReport, CatalogError> {
        let scenarios = self.catalog.resolve_selection(selected)?;

        #[cfg(feature = "parallel")]
        let summaries = {
            use rayon::prelude::*;
            scenarios
                .par_iter()
                .map(|scenario| self.summarise(scenario, dataset))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let summaries = scenarios
            .iter()
            .map(|scenario| self.summarise(scenario, dataset))
            .collect();

        Ok(ScenarioReport {
            summaries,
            exposure: dataset.cloned(),
        })
    }

    /// Build the report for a full set of session inputs.
    pub fn assemble(&self, inputs: &SessionInputs) -> Result<ScenarioReport, CatalogError> {
        self.build_summaries(inputs.selections(), inputs.dataset())
    }

    fn summarise(&self, scenario: &Scenario, dataset: Option<&ExposureDataset>) -> ScenarioSummary {
        ScenarioSummary {
            scenario: scenario.clone(),
            metrics: self.estimator.estimate(scenario, dataset),
        }
    }
}
