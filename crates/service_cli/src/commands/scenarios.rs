//! Scenarios command implementation
//!
//! Lists the scenario catalog.

use climate_core::catalog::ScenarioCatalog;
use climate_core::types::Currency;
use tracing::info;

use super::render_table;
use super::session::Context;
use crate::{CliError, Result};

/// Run the scenarios command
pub fn run(ctx: &Context, format: &str) -> Result<()> {
    info!(scenarios = ctx.catalog.len(), "Listing scenario catalog");
    println!("{}", render(&ctx.catalog, ctx.currency, format)?);
    Ok(())
}

fn render(catalog: &ScenarioCatalog, currency: Currency, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(catalog.scenarios())?),
        "table" => {
            let rows: Vec<Vec<String>> = catalog
                .scenarios()
                .iter()
                .map(|s| {
                    vec![
                        s.name().to_string(),
                        s.temperature_pathway().to_string(),
                        currency.label(s.carbon_price()),
                        format!("{:.0}%", s.physical_risk_factor() * 100.0),
                    ]
                })
                .collect();
            let mut out = render_table(
                &["Scenario", "Pathway", "Carbon Price (2030)", "Physical Loss"],
                &rows,
            );
            for scenario in catalog.scenarios() {
                out.push_str(&format!("\n{}\n  {}\n", scenario.name(), scenario.description()));
            }
            Ok(out)
        }
        other => Err(CliError::invalid_argument(format!(
            "Unknown format: {}. Supported: table, json",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_scenario() {
        let catalog = ScenarioCatalog::ngfs();
        let out = render(&catalog, Currency::AUD, "table").unwrap();
        for name in catalog.all_names() {
            assert!(out.contains(name), "{} missing", name);
        }
        assert!(out.contains("AUD $130"));
        assert!(out.contains("70%"));
    }

    #[test]
    fn test_json_is_array_of_scenarios() {
        let catalog = ScenarioCatalog::ngfs();
        let out = render(&catalog, Currency::AUD, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), catalog.len());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let catalog = ScenarioCatalog::ngfs();
        assert!(matches!(
            render(&catalog, Currency::AUD, "csv"),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
