//! Scenario catalog.
//!
//! The catalog is built from two tables that must agree with each other:
//! - a definitions table (name → narrative description)
//! - a parameters table (name → carbon price, pathway, risk profile, physical factor)
//!
//! plus an industry-defaults table used to pre-fill the selection. A scenario
//! present in one table but not the other is rejected when the catalog is
//! built, so lookups never see half a scenario.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ScenarioCatalog                  │
//! ├──────────────────────────────────────────────┤
//! │  ngfs      - Built-in NGFS tables            │
//! │  loader    - Custom catalogs from TOML       │
//! │  describe / parameters / all_names           │
//! │  defaults_for_industry / resolve_selection   │
//! └──────────────────────────────────────────────┘
//! ```

mod loader;
mod ngfs;

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::types::{CatalogError, Industry, RiskProfile, Scenario};

pub use ngfs::NET_ZERO_2050;

/// Maximum number of scenarios compared at once.
pub const MAX_SELECTED_SCENARIOS: usize = 3;

/// Row of the definitions table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScenarioDefinition {
    /// Scenario name
    pub name: String,
    /// Narrative description
    pub description: String,
}

impl ScenarioDefinition {
    /// Create a definition row.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Row of the parameters table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScenarioParameters {
    /// Scenario name
    pub name: String,
    /// Carbon price per tCO2e (2030)
    pub carbon_price: f64,
    /// Temperature outcome
    pub temperature_pathway: String,
    /// Scores in risk dimension order
    pub risk_profile: [f64; 5],
    /// Physical loss fraction in `[0, 1]`
    #[serde(rename = "physical_risk")]
    pub physical_risk_factor: f64,
}

/// Row of the industry-defaults table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IndustryDefaults {
    /// Industry the defaults apply to
    pub industry: Industry,
    /// Recommended scenarios, in display order
    pub scenarios: Vec<String>,
}

/// Validated collection of scenarios.
#[derive(Clone, Debug)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    index: HashMap<String, usize>,
    industry_defaults: Vec<IndustryDefaults>,
    fallback: String,
}

impl ScenarioCatalog {
    /// Build a catalog from its tables.
    ///
    /// Scenario order follows the definitions table.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateScenario`] if a name repeats within a table
    /// - [`CatalogError::MissingParameters`] / [`CatalogError::MissingDefinition`]
    ///   if the two tables disagree
    /// - [`CatalogError::InvalidParameter`] for out-of-range parameters
    /// - [`CatalogError::UnknownDefaultReference`] if a default or the fallback
    ///   names an unknown scenario
    /// - [`CatalogError::InvalidDefaults`] if an industry is listed twice or its
    ///   defaults exceed [`MAX_SELECTED_SCENARIOS`] or repeat a scenario
    pub fn from_tables(
        definitions: Vec<ScenarioDefinition>,
        parameters: Vec<ScenarioParameters>,
        industry_defaults: Vec<IndustryDefaults>,
        fallback: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let mut params_by_name: HashMap<String, ScenarioParameters> = HashMap::new();
        for params in parameters {
            if params_by_name.contains_key(&params.name) {
                return Err(CatalogError::DuplicateScenario(params.name));
            }
            params_by_name.insert(params.name.clone(), params);
        }

        let mut scenarios = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            if index.contains_key(&definition.name) {
                return Err(CatalogError::DuplicateScenario(definition.name));
            }
            let params = params_by_name
                .remove(&definition.name)
                .ok_or_else(|| CatalogError::MissingParameters(definition.name.clone()))?;
            let scenario = Scenario::new(
                definition.name,
                definition.description,
                params.carbon_price,
                params.temperature_pathway,
                RiskProfile::new(params.risk_profile),
                params.physical_risk_factor,
            )?;
            index.insert(scenario.name().to_string(), scenarios.len());
            scenarios.push(scenario);
        }

        // Anything left has parameters but no definition.
        if let Some(orphan) = params_by_name.into_keys().min() {
            return Err(CatalogError::MissingDefinition(orphan));
        }

        let fallback = fallback.into();
        if !index.contains_key(&fallback) {
            return Err(CatalogError::UnknownDefaultReference(
                "fallback".to_string(),
                fallback,
            ));
        }

        let mut seen_industries = HashSet::with_capacity(industry_defaults.len());
        for defaults in &industry_defaults {
            if !seen_industries.insert(&defaults.industry) {
                return Err(CatalogError::InvalidDefaults {
                    industry: defaults.industry.label().to_string(),
                    reason: "industry listed more than once".to_string(),
                });
            }
            if let Some(unknown) = defaults.scenarios.iter().find(|s| !index.contains_key(*s)) {
                return Err(CatalogError::UnknownDefaultReference(
                    defaults.industry.label().to_string(),
                    unknown.clone(),
                ));
            }
        }

        let catalog = Self {
            scenarios,
            index,
            industry_defaults,
            fallback,
        };
        catalog.check_defaults_selectable()?;
        Ok(catalog)
    }

    /// Every defaults list, and the fallback, must pass [`Self::resolve_selection`]
    /// so pre-filled selections are always valid.
    fn check_defaults_selectable(&self) -> Result<(), CatalogError> {
        let lists = self
            .industry_defaults
            .iter()
            .map(|d| (d.industry.label(), d.scenarios.as_slice()))
            .chain(std::iter::once((
                "fallback",
                std::slice::from_ref(&self.fallback),
            )));
        for (industry, names) in lists {
            self.resolve_selection(names)
                .map_err(|e| CatalogError::InvalidDefaults {
                    industry: industry.to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Description for a scenario.
    pub fn describe(&self, name: &str) -> Result<&str, CatalogError> {
        self.parameters(name).map(Scenario::description)
    }

    /// Full scenario for a name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownScenario`] if the name is not catalogued.
    pub fn parameters(&self, name: &str) -> Result<&Scenario, CatalogError> {
        self.index
            .get(name)
            .map(|&i| &self.scenarios[i])
            .ok_or_else(|| CatalogError::UnknownScenario(name.to_string()))
    }

    /// Whether a scenario name is catalogued.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Scenario names in catalog order.
    pub fn all_names(&self) -> Vec<&str> {
        self.scenarios.iter().map(Scenario::name).collect()
    }

    /// Scenarios in catalog order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the catalog holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Name returned when an industry has no defaults.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Recommended scenarios for an industry.
    ///
    /// Never fails: an industry without an entry gets the fallback scenario.
    pub fn defaults_for_industry(&self, industry: &Industry) -> Vec<&str> {
        self.industry_defaults
            .iter()
            .find(|d| &d.industry == industry)
            .map(|d| d.scenarios.iter().map(String::as_str).collect())
            .unwrap_or_else(|| vec![self.fallback.as_str()])
    }

    /// Validate a user selection and resolve it to scenarios, keeping its order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::SelectionLimitExceeded`] for more than
    ///   [`MAX_SELECTED_SCENARIOS`] names
    /// - [`CatalogError::DuplicateSelection`] if a name repeats
    /// - [`CatalogError::UnknownScenario`] for names outside the catalog
    pub fn resolve_selection<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<&Scenario>, CatalogError> {
        if names.len() > MAX_SELECTED_SCENARIOS {
            return Err(CatalogError::SelectionLimitExceeded {
                max: MAX_SELECTED_SCENARIOS,
                requested: names.len(),
            });
        }

        let mut seen = HashSet::with_capacity(names.len());
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                if !seen.insert(name) {
                    return Err(CatalogError::DuplicateSelection(name.to_string()));
                }
                self.parameters(name)
            })
            .collect()
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::ngfs()
    }
}
