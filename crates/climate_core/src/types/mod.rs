//! Core scenario, industry, and currency types.
//!
//! This module provides:
//! - `scenario`: Scenario parameters and the five-dimension risk profile
//! - `industry`: The industry selection with a soft `Other` variant
//! - `currency`: Reporting currency codes and monetary labels
//! - `error`: Structured error types for catalog, exposure, and currency operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Scenario`], [`RiskProfile`], [`RiskDimension`] from `scenario`
//! - [`Industry`] from `industry`
//! - [`Currency`] from `currency`
//! - [`CatalogError`], [`ExposureError`], [`CurrencyError`] from `error`

pub mod currency;
pub mod error;
pub mod industry;
pub mod scenario;

pub use currency::Currency;
pub use error::{CatalogError, CurrencyError, ExposureError};
pub use industry::Industry;
pub use scenario::{RiskDimension, RiskProfile, Scenario, RISK_SCORE_MAX};
