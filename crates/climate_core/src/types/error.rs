//! Error types for catalog, exposure, and currency operations.
//!
//! This module provides structured error types using `thiserror` for derivation.
//! Each concern owns its own enum so callers can branch on the failure that
//! actually blocks them (an upload error blocks monetary figures, a catalog
//! error blocks the whole selection).

use thiserror::Error;

/// Errors raised while building or querying the scenario catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Scenario name not present in the catalog.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// Scenario has parameters but no definition entry.
    #[error("Scenario has parameters but no definition: {0}")]
    MissingDefinition(String),

    /// Scenario has a definition but no parameters entry.
    #[error("Scenario has a definition but no parameters: {0}")]
    MissingParameters(String),

    /// Scenario name declared twice in the same table.
    #[error("Duplicate scenario: {0}")]
    DuplicateScenario(String),

    /// Scenario parameter outside its allowed range.
    #[error("Invalid parameter for scenario {scenario}: {reason}")]
    InvalidParameter {
        /// Scenario name
        scenario: String,
        /// Description of the violated constraint
        reason: String,
    },

    /// Industry defaults or fallback reference an unknown scenario.
    #[error("Industry default references unknown scenario: industry={0}, scenario={1}")]
    UnknownDefaultReference(String, String),

    /// Industry defaults (or the fallback) are not a valid selection.
    #[error("Invalid defaults for {industry}: {reason}")]
    InvalidDefaults {
        /// Industry label, or `fallback`
        industry: String,
        /// Why the defaults cannot be selected
        reason: String,
    },

    /// More scenarios selected than the comparison allows.
    #[error("At most {max} scenarios can be compared, got {requested}")]
    SelectionLimitExceeded {
        /// Maximum allowed selections
        max: usize,
        /// Number of selections requested
        requested: usize,
    },

    /// The same scenario selected more than once.
    #[error("Scenario selected more than once: {0}")]
    DuplicateSelection(String),

    /// Catalog file could not be read or parsed.
    #[error("Failed to load catalog: {0}")]
    Load(String),
}

/// Errors raised while parsing an uploaded exposure file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExposureError {
    /// File does not have the expected tabular shape.
    #[error("Malformed exposure file: {0}")]
    MalformedExposureFile(String),

    /// An exposure value is not a finite non-negative number.
    #[error("Invalid exposure value on line {line} (sector '{sector}'): '{value}'")]
    InvalidExposureValue {
        /// 1-based line number in the file, header included
        line: u64,
        /// Sector label of the offending row
        sector: String,
        /// Raw field content
        value: String,
    },

    /// File could not be opened.
    #[error("Failed to read exposure file: {0}")]
    Io(String),
}

/// Errors raised when parsing a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code not supported.
    #[error("Unknown currency code: {0}")]
    UnknownCode(String),
}
