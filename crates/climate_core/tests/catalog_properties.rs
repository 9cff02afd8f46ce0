//! Property tests for the catalog and exposure invariants.

use climate_core::catalog::{ScenarioCatalog, MAX_SELECTED_SCENARIOS, NET_ZERO_2050};
use climate_core::exposure::ExposureDataset;
use climate_core::types::{Industry, RiskDimension, RISK_SCORE_MAX};
use proptest::prelude::*;

#[test]
fn test_every_scenario_has_five_scores_and_bounded_physical_factor() {
    let catalog = ScenarioCatalog::ngfs();
    for scenario in catalog.scenarios() {
        assert_eq!(scenario.risk_profile().scores().len(), RiskDimension::ALL.len());
        assert!((0.0..=1.0).contains(&scenario.physical_risk_factor()));
        assert!(scenario.carbon_price() >= 0.0);
        for score in scenario.risk_profile().scores() {
            assert!((0.0..=RISK_SCORE_MAX).contains(score));
        }
    }
}

#[test]
fn test_every_name_resolves_in_both_tables() {
    let catalog = ScenarioCatalog::ngfs();
    for name in catalog.all_names() {
        assert!(catalog.describe(name).is_ok());
        assert_eq!(catalog.parameters(name).unwrap().name(), name);
    }
}

#[test]
fn test_defaults_are_always_a_valid_selection() {
    let catalog = ScenarioCatalog::ngfs();
    let mut industries = Industry::known().to_vec();
    industries.push(Industry::from_label("Unknown/Other"));
    for industry in industries {
        let defaults = catalog.defaults_for_industry(&industry);
        assert!(defaults.len() <= MAX_SELECTED_SCENARIOS);
        assert!(catalog.resolve_selection(&defaults).is_ok());
    }
    assert_eq!(
        catalog.defaults_for_industry(&Industry::from_label("Mining")),
        vec![NET_ZERO_2050]
    );
}

#[test]
fn test_two_row_upload_total() {
    let csv = "Sector,Exposure_M AUD\nFinancials,100\nReal Estate,50\n";
    let dataset = ExposureDataset::parse(csv.as_bytes()).unwrap();
    assert_eq!(dataset.total_exposure_millions(), 150.0);
}

fn sector_rows() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(("[A-Za-z ]{1,12}", 0.0f64..1.0e6), 0..40)
}

proptest! {
    #[test]
    fn prop_total_is_exact_row_sum(rows in sector_rows()) {
        let expected = rows.iter().fold(0.0, |acc, (_, v)| acc + v);
        let dataset = ExposureDataset::from_rows(rows.clone()).unwrap();
        prop_assert_eq!(dataset.total_exposure_millions(), expected);
        prop_assert_eq!(dataset.len(), rows.len());
    }

    #[test]
    fn prop_csv_total_matches_written_values(rows in sector_rows()) {
        let mut csv = String::from("Sector,Exposure_M AUD\n");
        for (sector, value) in &rows {
            csv.push_str(&format!("\"{}\",{}\n", sector, value));
        }
        let dataset = ExposureDataset::parse(csv.as_bytes()).unwrap();
        let expected = rows.iter().fold(0.0, |acc, (_, v)| acc + v);
        prop_assert_eq!(dataset.total_exposure_millions(), expected);
    }
}
