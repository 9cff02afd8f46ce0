//! Custom catalogs from TOML files.
//!
//! ```toml
//! fallback = "Net Zero 2050"
//!
//! [[definitions]]
//! name = "Net Zero 2050"
//! description = "Immediate and ambitious mitigation aligned with 1.5°C."
//!
//! [[parameters]]
//! name = "Net Zero 2050"
//! carbon_price = 130
//! temperature_pathway = "1.5°C"
//! risk_profile = [8, 3, 9, 7, 6]
//! physical_risk = 0.2
//!
//! [[industry_defaults]]
//! industry = "Energy"
//! scenarios = ["Net Zero 2050"]
//! ```

use std::path::Path;

use serde::Deserialize;

use super::{IndustryDefaults, ScenarioCatalog, ScenarioDefinition, ScenarioParameters};
use crate::types::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    fallback: String,
    definitions: Vec<ScenarioDefinition>,
    parameters: Vec<ScenarioParameters>,
    #[serde(default)]
    industry_defaults: Vec<IndustryDefaults>,
}

impl ScenarioCatalog {
    /// Parse and validate a catalog from TOML text.
    ///
    /// A `risk_profile` without exactly five scores is a parse error.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Load(e.to_string()))?;
        Self::from_tables(
            file.definitions,
            file.parameters,
            file.industry_defaults,
            file.fallback,
        )
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}
