//! Export behaviour across all sinks.

use std::fs;

use climate_core::catalog::{ScenarioCatalog, NET_ZERO_2050};
use climate_core::exposure::ExposureDataset;
use climate_core::types::Currency;
use climate_risk::{ReportAssembler, ReportDocument};
use report_sink::ReportFormat;

const FORMATS: [ReportFormat; 3] = [ReportFormat::Pdf, ReportFormat::Text, ReportFormat::Json];

fn document() -> ReportDocument {
    let catalog = ScenarioCatalog::ngfs();
    let dataset =
        ExposureDataset::from_rows(vec![("Financials", 100.0), ("Real Estate", 50.0)]).unwrap();
    let report = ReportAssembler::new(&catalog)
        .build_summaries(&[NET_ZERO_2050, "Hot House World"], Some(&dataset))
        .unwrap();
    ReportDocument::from_report(&report, Currency::AUD).with_preamble_line("Industry: Energy")
}

#[test]
fn test_every_format_writes_one_named_file() {
    let doc = document();
    for format in FORMATS {
        let dir = tempfile::tempdir().unwrap();
        let path = format.sink(dir.path()).write(&doc).unwrap();

        assert_eq!(path, dir.path().join(format.file_name()));
        assert!(fs::metadata(&path).unwrap().len() > 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}

#[test]
fn test_export_creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports").join("2026");
    let path = ReportFormat::Text.sink(&nested).write(&document()).unwrap();
    assert!(path.starts_with(&nested));
}

#[test]
fn test_failed_export_leaves_no_temporary_file() {
    let doc = document();
    for format in FORMATS {
        let dir = tempfile::tempdir().unwrap();
        // a directory squatting on the final name makes the rename fail
        fs::create_dir(dir.path().join(format.file_name())).unwrap();

        assert!(format.sink(dir.path()).write(&doc).is_err());

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![format.file_name()]);
    }
}

#[test]
fn test_text_and_json_agree_on_content() {
    let doc = document();
    let dir = tempfile::tempdir().unwrap();

    let text_path = ReportFormat::Text.sink(dir.path()).write(&doc).unwrap();
    let json_path = ReportFormat::Json.sink(dir.path()).write(&doc).unwrap();

    let text = fs::read_to_string(text_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();

    assert_eq!(json["title"], "Climate Scenario Comparison Report");
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    for section in sections {
        assert!(text.contains(section["heading"].as_str().unwrap()));
    }
}
