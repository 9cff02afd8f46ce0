//! # Climate Risk (L2: Application)
//!
//! Derived risk metrics and scenario report assembly on top of `climate_core`.
//!
//! This crate provides:
//! - `RiskEstimator`: the single place where transition VaR and physical
//!   loss are computed from a scenario and an optional exposure dataset
//! - `ReportAssembler`: ordered per-scenario summaries with the exposure
//!   listing held once
//! - Chart series (`RadarChart`, `BarChart`) and a format-neutral
//!   `ReportDocument` consumed by the output sinks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           climate_risk (L2)             │
//! ├─────────────────────────────────────────┤
//! │  estimator/ - DerivedMetrics            │
//! │  report/    - SessionInputs, Assembler, │
//! │               charts, document          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           climate_core (L1)             │
//! │  Scenario catalog, exposure datasets    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: compute per-scenario summaries with rayon (order preserved)
//!
//! ## Example
//!
//! ```
//! use climate_core::catalog::ScenarioCatalog;
//! use climate_core::exposure::ExposureDataset;
//! use climate_core::types::{Currency, Industry};
//! use climate_risk::report::{BarChart, ReportAssembler, SessionInputs};
//!
//! let catalog = ScenarioCatalog::ngfs();
//! let dataset = ExposureDataset::from_rows(vec![("Financials", 100.0), ("Real Estate", 50.0)]).unwrap();
//! let inputs = SessionInputs::with_defaults(&catalog, Industry::Energy, Some(dataset));
//!
//! let report = ReportAssembler::new(&catalog).assemble(&inputs).unwrap();
//! let bars = BarChart::from_report(&report, Currency::AUD).unwrap();
//! assert_eq!(bars.categories.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod estimator;
pub mod report;

// Re-export commonly used types
pub use estimator::{DerivedMetrics, RiskEstimator};
pub use report::{
    BarChart, RadarChart, ReportAssembler, ReportDocument, ScenarioReport, ScenarioSummary,
    SessionInputs,
};
