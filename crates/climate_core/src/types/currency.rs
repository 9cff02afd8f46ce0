//! Reporting currency for monetary labels.
//!
//! Exposure values, carbon prices, and derived estimates are all quoted in a
//! single reporting currency. The currency only affects labels: no FX
//! conversion is ever applied.
//!
//! # Examples
//!
//! ```
//! use climate_core::types::currency::Currency;
//!
//! let aud = Currency::default();
//! assert_eq!(aud.code(), "AUD");
//! assert_eq!(aud.format_millions(120.0), "AUD $120.00M");
//! assert_eq!(aud.axis_label(), "AUD ($M)");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// Reporting currencies supported for labels.
///
/// # Variants
/// - `AUD`: Australian Dollar (default, matches the ASRS disclosure context)
/// - `NZD`: New Zealand Dollar
/// - `USD`: United States Dollar
/// - `EUR`: Euro
/// - `GBP`: British Pound Sterling
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Australian Dollar
    #[default]
    AUD,
    /// New Zealand Dollar
    NZD,
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Returns the currency symbol used in monetary labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::AUD | Currency::NZD | Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// Labels an amount as written, e.g. `AUD $130`.
    pub fn label(&self, amount: impl fmt::Display) -> String {
        format!("{} {}{}", self.code(), self.symbol(), amount)
    }

    /// Labels an amount in millions at two decimal places, e.g. `AUD $120.00M`.
    ///
    /// Two decimals is display precision only; callers keep the full value.
    pub fn format_millions(&self, amount: f64) -> String {
        format!("{} {}{:.2}M", self.code(), self.symbol(), amount)
    }

    /// Axis label for charts quoted in millions, e.g. `AUD ($M)`.
    pub fn axis_label(&self) -> String {
        format!("{} ({}M)", self.code(), self.symbol())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.trim().to_uppercase().as_str() {
            "AUD" => Ok(Currency::AUD),
            "NZD" => Ok(Currency::NZD),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            _ => Err(CurrencyError::UnknownCode(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
