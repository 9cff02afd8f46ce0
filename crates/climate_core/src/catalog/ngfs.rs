//! Built-in NGFS scenario tables.
//!
//! Five scenarios from the NGFS phase IV and 2025 releases, each carrying an
//! ASRS cross-reference in its description.

use super::{IndustryDefaults, ScenarioCatalog, ScenarioDefinition, ScenarioParameters};
use crate::types::Industry;

/// Baseline scenario, also the fallback for industries without defaults.
pub const NET_ZERO_2050: &str = "Net Zero 2050";
const DELAYED_TRANSITION: &str = "Delayed Transition";
const HOT_HOUSE_WORLD: &str = "Hot House World";
const IMMEDIATE_DISORDERLY: &str = "Immediate Disorderly Transition (2025 release)";
const CURRENT_POLICIES_EXTENSION: &str = "Current Policies Extension (2025 release)";

fn definitions() -> Vec<ScenarioDefinition> {
    vec![
        ScenarioDefinition::new(
            NET_ZERO_2050,
            "Immediate and ambitious mitigation aligned with 1.5°C. (ASRS Ref: Strategy S2-6, Metrics M2-1)",
        ),
        ScenarioDefinition::new(
            DELAYED_TRANSITION,
            "Postponed mitigation leading to a sharper adjustment later. (ASRS Ref: Strategy S2-6, Risk R2-2)",
        ),
        ScenarioDefinition::new(
            HOT_HOUSE_WORLD,
            "No meaningful transition, resulting in >3°C warming. (ASRS Ref: Risk R2-1, Metrics M2-2)",
        ),
        ScenarioDefinition::new(
            IMMEDIATE_DISORDERLY,
            "Aggressive action taken suddenly, creating short-term volatility. (ASRS Ref: Strategy S2-6, Governance G2-3)",
        ),
        ScenarioDefinition::new(
            CURRENT_POLICIES_EXTENSION,
            "Continuation of current insufficient policies, high physical risks. (ASRS Ref: Risk R2-1, Strategy S2-6)",
        ),
    ]
}

fn parameters() -> Vec<ScenarioParameters> {
    let row = |name: &str, carbon_price: f64, pathway: &str, profile: [f64; 5], physical: f64| {
        ScenarioParameters {
            name: name.to_string(),
            carbon_price,
            temperature_pathway: pathway.to_string(),
            risk_profile: profile,
            physical_risk_factor: physical,
        }
    };

    vec![
        row(NET_ZERO_2050, 130.0, "1.5°C", [8.0, 3.0, 9.0, 7.0, 6.0], 0.2),
        row(DELAYED_TRANSITION, 180.0, "2.4°C", [7.0, 5.0, 8.0, 6.0, 4.0], 0.4),
        row(HOT_HOUSE_WORLD, 0.0, ">3°C", [4.0, 9.0, 2.0, 5.0, 3.0], 0.7),
        row(IMMEDIATE_DISORDERLY, 160.0, "<2°C", [9.0, 6.0, 8.0, 8.0, 5.0], 0.3),
        row(CURRENT_POLICIES_EXTENSION, 20.0, ">3.5°C", [3.0, 10.0, 1.0, 4.0, 2.0], 0.8),
    ]
}

fn industry_defaults() -> Vec<IndustryDefaults> {
    let entry = |industry: Industry, scenarios: [&str; 2]| IndustryDefaults {
        industry,
        scenarios: scenarios.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        entry(Industry::FinancialServices, [NET_ZERO_2050, DELAYED_TRANSITION]),
        entry(Industry::RealEstate, [NET_ZERO_2050, HOT_HOUSE_WORLD]),
        entry(Industry::Agriculture, [DELAYED_TRANSITION, HOT_HOUSE_WORLD]),
        entry(Industry::Energy, [IMMEDIATE_DISORDERLY, NET_ZERO_2050]),
        entry(Industry::Manufacturing, [CURRENT_POLICIES_EXTENSION, DELAYED_TRANSITION]),
    ]
}

impl ScenarioCatalog {
    /// The built-in NGFS catalog.
    pub fn ngfs() -> Self {
        match Self::from_tables(definitions(), parameters(), industry_defaults(), NET_ZERO_2050) {
            Ok(catalog) => catalog,
            // The tables above are constants covered by tests.
            Err(e) => unreachable!("built-in NGFS catalog is invalid: {}", e),
        }
    }
}
