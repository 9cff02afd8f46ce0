//! # climate_core: Foundation for Climate Scenario Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! climate_core is the bottom layer of the workspace, providing:
//! - Scenario types: `Scenario`, `RiskProfile`, `RiskDimension` (`types::scenario`)
//! - Industry selection: `Industry` (`types::industry`)
//! - Reporting currency: `Currency` (`types::currency`)
//! - Error types: `CatalogError`, `ExposureError`, `CurrencyError` (`types::error`)
//! - The NGFS scenario catalog with industry defaults (`catalog`)
//! - Sector exposure datasets parsed from CSV (`exposure`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - csv: Exposure file parsing
//! - serde / toml: Serialisation and custom catalog files
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use climate_core::catalog::ScenarioCatalog;
//! use climate_core::exposure::ExposureDataset;
//! use climate_core::types::Industry;
//!
//! let catalog = ScenarioCatalog::ngfs();
//! let defaults = catalog.defaults_for_industry(&Industry::Energy);
//! assert_eq!(defaults[0], "Immediate Disorderly Transition (2025 release)");
//!
//! let csv = "Sector,Exposure_M AUD\nFinancials,100\nReal Estate,50\n";
//! let dataset = ExposureDataset::parse(csv.as_bytes()).unwrap();
//! assert_eq!(dataset.total_exposure_millions(), 150.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalog;
pub mod exposure;
pub mod types;
