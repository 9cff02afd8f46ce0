//! Scenario parameters and risk profiles.
//!
//! A [`Scenario`] bundles the narrative of an NGFS pathway with the fixed
//! assumptions used by the estimator: a 2030 carbon price, a temperature
//! outcome, a five-dimension risk profile, and a physical-risk loss fraction.
//!
//! # Examples
//!
//! ```
//! use climate_core::types::{RiskDimension, RiskProfile, Scenario};
//!
//! let scenario = Scenario::new(
//!     "Net Zero 2050",
//!     "Immediate and ambitious mitigation aligned with 1.5°C.",
//!     130.0,
//!     "1.5°C",
//!     RiskProfile::new([8.0, 3.0, 9.0, 7.0, 6.0]),
//!     0.2,
//! )
//! .unwrap();
//!
//! assert_eq!(scenario.risk_profile().score(RiskDimension::TransitionRisk), 8.0);
//! ```

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Upper end of the conventional risk score scale.
pub const RISK_SCORE_MAX: f64 = 10.0;

/// The five axes of a risk profile, in their fixed order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskDimension {
    /// Exposure to policy, technology, and market shifts
    TransitionRisk,
    /// Exposure to acute and chronic physical hazards
    PhysicalRisk,
    /// Carbon intensity of the exposed activities
    CarbonExposure,
    /// Breadth of the scenario narrative
    ScenarioCoverage,
    /// Maturity of mitigation measures
    MitigationMaturity,
}

impl RiskDimension {
    /// All dimensions in profile order.
    pub const ALL: [RiskDimension; 5] = [
        RiskDimension::TransitionRisk,
        RiskDimension::PhysicalRisk,
        RiskDimension::CarbonExposure,
        RiskDimension::ScenarioCoverage,
        RiskDimension::MitigationMaturity,
    ];

    /// Position of this dimension within a profile.
    pub fn index(&self) -> usize {
        match self {
            RiskDimension::TransitionRisk => 0,
            RiskDimension::PhysicalRisk => 1,
            RiskDimension::CarbonExposure => 2,
            RiskDimension::ScenarioCoverage => 3,
            RiskDimension::MitigationMaturity => 4,
        }
    }

    /// Axis label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskDimension::TransitionRisk => "Transition Risk",
            RiskDimension::PhysicalRisk => "Physical Risk",
            RiskDimension::CarbonExposure => "Carbon Exposure",
            RiskDimension::ScenarioCoverage => "Scenario Coverage",
            RiskDimension::MitigationMaturity => "Mitigation Maturity",
        }
    }
}

/// Five risk scores, one per [`RiskDimension`], conventionally in `[0, 10]`.
///
/// The fixed-size array makes the length a type-level guarantee.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskProfile([f64; 5]);

impl RiskProfile {
    /// Create a profile from scores in [`RiskDimension::ALL`] order.
    pub fn new(scores: [f64; 5]) -> Self {
        Self(scores)
    }

    /// Score for one dimension.
    #[inline]
    pub fn score(&self, dimension: RiskDimension) -> f64 {
        self.0[dimension.index()]
    }

    /// Scores in profile order.
    pub fn scores(&self) -> &[f64; 5] {
        &self.0
    }

    /// Scores with the first repeated at the end, closing a radar ring.
    pub fn closed_ring(&self) -> Vec<f64> {
        let mut ring = self.0.to_vec();
        ring.push(self.0[0]);
        ring
    }
}

/// A named climate scenario with its fixed assumptions.
///
/// Only constructed through [`Scenario::new`], so every instance satisfies
/// the parameter ranges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    name: String,
    description: String,
    carbon_price: f64,
    temperature_pathway: String,
    risk_profile: RiskProfile,
    physical_risk_factor: f64,
}

impl Scenario {
    /// Create a validated scenario.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidParameter`] when the carbon price is
    /// negative, the physical risk factor is outside `[0, 1]`, or any number
    /// is not finite.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        carbon_price: f64,
        temperature_pathway: impl Into<String>,
        risk_profile: RiskProfile,
        physical_risk_factor: f64,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let invalid = |reason: String| CatalogError::InvalidParameter {
            scenario: name.clone(),
            reason,
        };

        if !carbon_price.is_finite() || carbon_price < 0.0 {
            return Err(invalid(format!(
                "carbon_price must be non-negative, got {}",
                carbon_price
            )));
        }
        if !(0.0..=1.0).contains(&physical_risk_factor) {
            return Err(invalid(format!(
                "physical_risk_factor must be in [0, 1], got {}",
                physical_risk_factor
            )));
        }
        if let Some(score) = risk_profile.scores().iter().find(|s| !s.is_finite()) {
            return Err(invalid(format!("risk_profile score is not finite: {}", score)));
        }

        Ok(Self {
            name,
            description: description.into(),
            carbon_price,
            temperature_pathway: temperature_pathway.into(),
            risk_profile,
            physical_risk_factor,
        })
    }

    /// Unique scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Narrative description with disclosure references.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Carbon price per tCO2e (2030 horizon).
    pub fn carbon_price(&self) -> f64 {
        self.carbon_price
    }

    /// Temperature outcome, e.g. `1.5°C`.
    pub fn temperature_pathway(&self) -> &str {
        &self.temperature_pathway
    }

    /// Risk profile scores.
    pub fn risk_profile(&self) -> &RiskProfile {
        &self.risk_profile
    }

    /// Fraction of exposure lost to physical impacts.
    pub fn physical_risk_factor(&self) -> f64 {
        self.physical_risk_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RiskProfile {
        RiskProfile::new([8.0, 3.0, 9.0, 7.0, 6.0])
    }

    #[test]
    fn test_dimension_order_matches_index() {
        for (i, dimension) in RiskDimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), i);
        }
        assert_eq!(RiskDimension::ALL[0].label(), "Transition Risk");
        assert_eq!(RiskDimension::ALL[4].label(), "Mitigation Maturity");
    }

    #[test]
    fn test_profile_score_lookup() {
        let p = profile();
        assert_eq!(p.score(RiskDimension::TransitionRisk), 8.0);
        assert_eq!(p.score(RiskDimension::CarbonExposure), 9.0);
    }

    #[test]
    fn test_closed_ring_repeats_first_score() {
        let ring = profile().closed_ring();
        assert_eq!(ring.len(), 6);
        assert_eq!(ring[0], ring[5]);
    }

    #[test]
    fn test_scenario_new_valid() {
        let s = Scenario::new("A", "desc", 0.0, ">3°C", profile(), 1.0).unwrap();
        assert_eq!(s.name(), "A");
        assert_eq!(s.carbon_price(), 0.0);
        assert_eq!(s.physical_risk_factor(), 1.0);
    }

    #[test]
    fn test_scenario_rejects_negative_carbon_price() {
        let err = Scenario::new("A", "desc", -1.0, "1.5°C", profile(), 0.2).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidParameter { .. }));
    }

    #[test]
    fn test_scenario_rejects_physical_factor_out_of_range() {
        assert!(Scenario::new("A", "d", 10.0, "1.5°C", profile(), 1.2).is_err());
        assert!(Scenario::new("A", "d", 10.0, "1.5°C", profile(), -0.1).is_err());
        assert!(Scenario::new("A", "d", 10.0, "1.5°C", profile(), f64::NAN).is_err());
    }

    #[test]
    fn test_scenario_rejects_non_finite_score() {
        let bad = RiskProfile::new([f64::INFINITY, 3.0, 9.0, 7.0, 6.0]);
        assert!(Scenario::new("A", "d", 10.0, "1.5°C", bad, 0.2).is_err());
    }
}
