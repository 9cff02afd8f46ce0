//! Industry selection.
//!
//! The form offers a fixed set of industries, each of which maps to a list of
//! recommended scenarios in the catalog. Any other label is carried as
//! [`Industry::Other`] so that the session always stays in a valid state.
//!
//! # Examples
//!
//! ```
//! use climate_core::types::Industry;
//!
//! assert_eq!(Industry::from_label("Energy"), Industry::Energy);
//! assert_eq!(Industry::from_label("real estate"), Industry::RealEstate);
//! assert_eq!(
//!     Industry::from_label("Unknown/Other"),
//!     Industry::Other("Unknown/Other".to_string())
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Industry sector chosen by the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    /// Banks, insurers, asset managers
    FinancialServices,
    /// Property owners and developers
    RealEstate,
    /// Farming and food production
    Agriculture,
    /// Generation, extraction, utilities
    Energy,
    /// Industrial production
    Manufacturing,
    /// Any label outside the enumerated set
    Other(String),
}

impl Industry {
    /// The enumerated industries in display order.
    pub fn known() -> [Industry; 5] {
        [
            Industry::FinancialServices,
            Industry::RealEstate,
            Industry::Agriculture,
            Industry::Energy,
            Industry::Manufacturing,
        ]
    }

    /// Maps a label to an industry (case-insensitive). Never fails.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        Self::known()
            .into_iter()
            .find(|industry| industry.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Industry::Other(trimmed.to_string()))
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Industry::FinancialServices => "Financial Services",
            Industry::RealEstate => "Real Estate",
            Industry::Agriculture => "Agriculture",
            Industry::Energy => "Energy",
            Industry::Manufacturing => "Manufacturing",
            Industry::Other(label) => label,
        }
    }

    /// Whether this industry belongs to the enumerated set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Industry::Other(_))
    }
}

impl From<String> for Industry {
    fn from(label: String) -> Self {
        Industry::from_label(&label)
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.label().to_string()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
