//! Shared session construction.
//!
//! Loads the scenario catalog named by the configuration, parses the
//! optional exposure file, and turns command arguments into
//! [`SessionInputs`].

use std::path::Path;

use climate_core::catalog::ScenarioCatalog;
use climate_core::exposure::{ExposureColumns, ExposureDataset};
use climate_core::types::{Currency, Industry};
use climate_risk::{ReportAssembler, ScenarioReport, SessionInputs};
use tracing::{debug, info};

use super::SelectionArgs;
use crate::config::AppConfig;
use crate::{CliError, Result};

/// Resolved configuration plus the loaded catalog.
pub struct Context {
    /// Validated configuration
    pub config: AppConfig,
    /// Scenario catalog in use
    pub catalog: ScenarioCatalog,
    /// Reporting currency
    pub currency: Currency,
}

impl Context {
    /// Load the catalog and currency named by `config`.
    pub fn load(config: AppConfig) -> Result<Self> {
        let catalog = load_catalog(config.catalog.as_deref())?;
        let currency = config.currency()?;
        Ok(Self {
            config,
            catalog,
            currency,
        })
    }

    /// Build session inputs from command arguments.
    pub fn session(&self, args: &SelectionArgs) -> Result<SessionInputs> {
        let dataset = match &args.exposure {
            Some(path) => Some(load_dataset(path, &self.config.exposure.columns())?),
            None => None,
        };
        Ok(build_inputs(
            &self.catalog,
            &args.industry,
            &args.scenarios,
            dataset,
        ))
    }

    /// Build the scenario report for command arguments.
    pub fn report(&self, args: &SelectionArgs) -> Result<(SessionInputs, ScenarioReport)> {
        let inputs = self.session(args)?;
        let report = ReportAssembler::new(&self.catalog).assemble(&inputs)?;
        debug!(
            industry = %inputs.industry(),
            scenarios = report.summaries().len(),
            with_exposure = report.exposure().is_some(),
            "Assembled scenario report"
        );
        Ok((inputs, report))
    }
}

/// Load a custom catalog, or the built-in NGFS catalog when no path is configured.
pub fn load_catalog(path: Option<&Path>) -> Result<ScenarioCatalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            let catalog = ScenarioCatalog::load(path)?;
            info!(path = %path.display(), scenarios = catalog.len(), "Loaded custom catalog");
            Ok(catalog)
        }
        None => Ok(ScenarioCatalog::ngfs()),
    }
}

/// Parse an exposure file.
pub fn load_dataset(path: &Path, columns: &ExposureColumns) -> Result<ExposureDataset> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let dataset = ExposureDataset::from_path(path, columns)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        total = dataset.total_exposure_millions(),
        "Loaded exposure data"
    );
    Ok(dataset)
}

/// Explicit scenarios when given, otherwise the industry defaults.
pub fn build_inputs(
    catalog: &ScenarioCatalog,
    industry: &str,
    scenarios: &[String],
    dataset: Option<ExposureDataset>,
) -> SessionInputs {
    let industry = Industry::from_label(industry);
    if scenarios.is_empty() {
        SessionInputs::with_defaults(catalog, industry, dataset)
    } else {
        SessionInputs::new(industry, scenarios.to_vec(), dataset)
    }
}
