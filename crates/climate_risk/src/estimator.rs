//! Derived risk metrics.
//!
//! The only arithmetic in the system lives here. Both estimates are simple
//! linear proxies over total exposure, not calibrated financial models:
//!
//! ```text
//! transition VaR = total exposure × (transition risk score / 10)
//! physical loss  = total exposure × physical risk factor
//! ```
//!
//! Without an exposure dataset both estimates are `None`. Zero is a
//! legitimate estimate (e.g. a dataset whose rows sum to zero) and is never
//! used to mean "no data".

use climate_core::exposure::ExposureDataset;
use climate_core::types::{RiskDimension, Scenario, RISK_SCORE_MAX};
use serde::Serialize;

/// Monetary estimates for one scenario, in millions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Estimated transition value-at-risk
    pub estimated_transition_var: Option<f64>,
    /// Estimated physical-risk loss
    pub estimated_physical_loss: Option<f64>,
}

impl DerivedMetrics {
    /// Metrics for a session without exposure data.
    pub fn not_applicable() -> Self {
        Self::default()
    }

    /// Whether the estimates were computed from a dataset.
    pub fn is_applicable(&self) -> bool {
        self.estimated_transition_var.is_some() && self.estimated_physical_loss.is_some()
    }
}

/// Maps a scenario and optional exposure to [`DerivedMetrics`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RiskEstimator;

impl RiskEstimator {
    /// Create an estimator.
    pub fn new() -> Self {
        Self
    }

    /// Estimate both metrics for a scenario.
    ///
    /// Pure and total: identical inputs always give identical outputs.
    pub fn estimate(
        &self,
        scenario: &Scenario,
        dataset: Option<&ExposureDataset>,
    ) -> DerivedMetrics {
        match dataset {
            None => DerivedMetrics::not_applicable(),
            Some(dataset) => {
                let total = dataset.total_exposure_millions();
                DerivedMetrics {
                    estimated_transition_var: Some(total * transition_var_multiplier(scenario)),
                    estimated_physical_loss: Some(total * scenario.physical_risk_factor()),
                }
            }
        }
    }
}

/// Transition risk score rescaled from `[0, 10]` to a loss fraction.
#[inline]
pub fn transition_var_multiplier(scenario: &Scenario) -> f64 {
    scenario.risk_profile().score(RiskDimension::TransitionRisk) / RISK_SCORE_MAX
}
