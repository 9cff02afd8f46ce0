//! End-to-end checks from session inputs to charts and document.

use approx::assert_relative_eq;
use climate_core::catalog::{ScenarioCatalog, NET_ZERO_2050};
use climate_core::exposure::ExposureDataset;
use climate_core::types::{Currency, Industry, RiskDimension};
use climate_risk::report::{BarChart, RadarChart, ReportDocument};
use climate_risk::{ReportAssembler, RiskEstimator, SessionInputs};
use proptest::prelude::*;

const ENERGY_CSV: &str = "Sector,Exposure_M AUD\nFinancials,100\nReal Estate,50\n";

#[test]
fn test_energy_session_with_upload() {
    let catalog = ScenarioCatalog::ngfs();
    let dataset = ExposureDataset::parse(ENERGY_CSV.as_bytes()).unwrap();
    let inputs =
        SessionInputs::with_defaults(&catalog, Industry::from_label("Energy"), Some(dataset));

    let report = ReportAssembler::new(&catalog).assemble(&inputs).unwrap();
    assert_eq!(
        report.scenario_names(),
        vec!["Immediate Disorderly Transition (2025 release)", NET_ZERO_2050]
    );

    let net_zero = &report.summaries()[1];
    assert_relative_eq!(net_zero.metrics.estimated_transition_var.unwrap(), 120.0, epsilon = 1e-9);
    assert_relative_eq!(net_zero.metrics.estimated_physical_loss.unwrap(), 30.0, epsilon = 1e-9);

    let radar = RadarChart::from_report(&report);
    let bars = BarChart::from_report(&report, Currency::AUD).unwrap();
    let doc = ReportDocument::from_report(&report, Currency::AUD);

    // Legend order and section order agree.
    let radar_labels: Vec<_> = radar.series.iter().map(|s| s.label.as_str()).collect();
    let doc_headings: Vec<_> = doc
        .sections
        .iter()
        .filter_map(|s| s.heading.strip_prefix("Scenario: "))
        .collect();
    assert_eq!(radar_labels, report.scenario_names());
    assert_eq!(bars.categories, report.scenario_names());
    assert_eq!(doc_headings, report.scenario_names());
}

#[test]
fn test_session_without_upload() {
    let catalog = ScenarioCatalog::ngfs();
    let inputs =
        SessionInputs::with_defaults(&catalog, Industry::from_label("Unknown/Other"), None);
    assert_eq!(inputs.selections(), &[NET_ZERO_2050.to_string()]);

    let report = ReportAssembler::new(&catalog).assemble(&inputs).unwrap();
    assert!(BarChart::from_report(&report, Currency::AUD).is_none());

    let text = ReportDocument::from_report(&report, Currency::AUD).to_plain_text();
    assert!(text.contains("Temperature Pathway: 1.5°C"));
    assert!(text.contains("Carbon Price (2030): AUD $130 per tCO2e"));
    assert!(!text.contains("Estimated"));
    assert!(!text.contains("Uploaded Exposure Data"));
}

#[test]
fn test_bars_match_estimator_for_every_scenario() {
    let catalog = ScenarioCatalog::ngfs();
    let dataset = ExposureDataset::parse(ENERGY_CSV.as_bytes()).unwrap();
    let estimator = RiskEstimator::new();
    for names in catalog.all_names().chunks(3) {
        let report = ReportAssembler::new(&catalog)
            .build_summaries(names, Some(&dataset))
            .unwrap();
        let bars = BarChart::from_report(&report, Currency::AUD).unwrap();
        for (i, name) in names.iter().enumerate() {
            let metrics = estimator.estimate(catalog.parameters(name).unwrap(), Some(&dataset));
            assert_eq!(Some(bars.series[0].values[i]), metrics.estimated_transition_var);
            assert_eq!(Some(bars.series[1].values[i]), metrics.estimated_physical_loss);
        }
    }
}

fn selection() -> impl Strategy<Value = Vec<&'static str>> {
    let names: Vec<&'static str> = vec![
        "Net Zero 2050",
        "Delayed Transition",
        "Hot House World",
        "Immediate Disorderly Transition (2025 release)",
        "Current Policies Extension (2025 release)",
    ];
    Just(names).prop_shuffle().prop_flat_map(|names| {
        (0..=3usize).prop_map(move |n| names[..n].to_vec())
    })
}

proptest! {
    #[test]
    fn prop_estimate_formula(total in 0.0f64..1.0e9, idx in 0usize..5) {
        let catalog = ScenarioCatalog::ngfs();
        let scenario = &catalog.scenarios()[idx];
        let dataset = ExposureDataset::from_rows(vec![("All", total)]).unwrap();
        let estimator = RiskEstimator::new();

        let first = estimator.estimate(scenario, Some(&dataset));
        let second = estimator.estimate(scenario, Some(&dataset));
        prop_assert_eq!(first, second);

        let expected_var =
            total * scenario.risk_profile().score(RiskDimension::TransitionRisk) / 10.0;
        let expected_loss = total * scenario.physical_risk_factor();
        let tol = 1e-9 * total.max(1.0);
        prop_assert!((first.estimated_transition_var.unwrap() - expected_var).abs() <= tol);
        prop_assert!((first.estimated_physical_loss.unwrap() - expected_loss).abs() <= tol);

        let absent = estimator.estimate(scenario, None);
        prop_assert!(absent.estimated_transition_var.is_none());
        prop_assert!(absent.estimated_physical_loss.is_none());
    }

    #[test]
    fn prop_summaries_preserve_order_and_hold_exposure_once(
        names in selection(),
        with_data in any::<bool>(),
    ) {
        let catalog = ScenarioCatalog::ngfs();
        let dataset = ExposureDataset::parse(ENERGY_CSV.as_bytes()).unwrap();
        let report = ReportAssembler::new(&catalog)
            .build_summaries(&names, with_data.then_some(&dataset))
            .unwrap();
        prop_assert_eq!(report.scenario_names(), names.clone());

        let text = ReportDocument::from_report(&report, Currency::AUD).to_plain_text();
        let expected_listings = usize::from(with_data);
        prop_assert_eq!(text.matches("Uploaded Exposure Data:").count(), expected_listings);
    }
}
