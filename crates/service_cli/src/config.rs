//! CLI configuration management.
//!
//! Handles loading of configuration from an optional TOML file with
//! environment variable override support.

use climate_core::exposure::{ExposureColumns, DEFAULT_SECTOR_COLUMN, DEFAULT_VALUE_COLUMN};
use climate_core::types::{Currency, CurrencyError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Exposure file header labels
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExposureConfig {
    /// Header of the sector column
    #[serde(default = "default_sector_column")]
    pub sector_column: String,

    /// Header of the exposure value column (millions)
    #[serde(default = "default_value_column")]
    pub value_column: String,
}

fn default_sector_column() -> String {
    DEFAULT_SECTOR_COLUMN.to_string()
}

fn default_value_column() -> String {
    DEFAULT_VALUE_COLUMN.to_string()
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            sector_column: default_sector_column(),
            value_column: default_value_column(),
        }
    }
}

impl ExposureConfig {
    /// Column labels for the exposure parser
    pub fn columns(&self) -> ExposureColumns {
        ExposureColumns {
            sector: self.sector_column.clone(),
            value: self.value_column.clone(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Reporting currency code used in labels
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Directory receiving exported reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Custom scenario catalog (TOML); the NGFS catalog when unset
    pub catalog: Option<PathBuf>,

    /// Exposure file columns
    #[serde(default)]
    pub exposure: ExposureConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./reports")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            currency: default_currency(),
            output_dir: default_output_dir(),
            catalog: None,
            exposure: ExposureConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("CLIMATE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(currency) = std::env::var("CLIMATE_CURRENCY") {
            self.currency = currency;
        }

        if let Ok(output_dir) = std::env::var("CLIMATE_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(catalog) = std::env::var("CLIMATE_CATALOG") {
            self.catalog = Some(PathBuf::from(catalog));
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.currency.parse::<Currency>() {
            errors.push(format!("Invalid currency: {}", e));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if let Some(catalog) = &self.catalog {
            if catalog.as_os_str().is_empty() {
                errors.push("catalog path cannot be empty".to_string());
            }
        }

        if self.exposure.sector_column.trim().is_empty() {
            errors.push("exposure.sector_column cannot be empty".to_string());
        }
        if self.exposure.value_column.trim().is_empty() {
            errors.push("exposure.value_column cannot be empty".to_string());
        }
        if self.exposure.sector_column.trim() == self.exposure.value_column.trim() {
            errors.push(format!(
                "exposure.sector_column and exposure.value_column must differ (both '{}')",
                self.exposure.sector_column
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (if present) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Reporting currency
    pub fn currency(&self) -> Result<Currency, CurrencyError> {
        self.currency.parse()
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
