//! Sector exposure datasets.
//!
//! An [`ExposureDataset`] is parsed once from an uploaded CSV file and is
//! read-only afterwards. Only two columns matter: a sector label and an
//! exposure value in millions. Extra columns are ignored.
//!
//! A session without an upload has no dataset at all; downstream code takes
//! `Option<&ExposureDataset>` and must never substitute a zero total.
//!
//! # Examples
//!
//! ```
//! use climate_core::exposure::ExposureDataset;
//!
//! let csv = "Sector,Exposure_M AUD\nFinancials,100\nReal Estate,50\n";
//! let dataset = ExposureDataset::parse(csv.as_bytes()).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.total_exposure_millions(), 150.0);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::ExposureError;

/// Default header of the sector label column.
pub const DEFAULT_SECTOR_COLUMN: &str = "Sector";

/// Default header of the exposure value column.
pub const DEFAULT_VALUE_COLUMN: &str = "Exposure_M AUD";

/// Header labels of the two required columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureColumns {
    /// Sector label header
    #[serde(default = "default_sector_column")]
    pub sector: String,
    /// Exposure value header (millions)
    #[serde(default = "default_value_column")]
    pub value: String,
}

fn default_sector_column() -> String {
    DEFAULT_SECTOR_COLUMN.to_string()
}

fn default_value_column() -> String {
    DEFAULT_VALUE_COLUMN.to_string()
}

impl Default for ExposureColumns {
    fn default() -> Self {
        Self {
            sector: default_sector_column(),
            value: default_value_column(),
        }
    }
}

/// One sector and its exposure in millions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExposureRow {
    sector: String,
    exposure_millions: f64,
}

impl ExposureRow {
    /// Sector label.
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Exposure in millions.
    pub fn exposure_millions(&self) -> f64 {
        self.exposure_millions
    }
}

/// Parsed exposure table with its aggregate total.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExposureDataset {
    rows: Vec<ExposureRow>,
    total_exposure_millions: f64,
}

impl ExposureDataset {
    /// Parse CSV using the default column headers.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ExposureError> {
        Self::parse_with(reader, &ExposureColumns::default())
    }

    /// Parse CSV using the given column headers.
    ///
    /// # Errors
    ///
    /// - [`ExposureError::MalformedExposureFile`] if a required header is
    ///   missing or a row does not match the header width
    /// - [`ExposureError::InvalidExposureValue`] if a value is not a finite
    ///   non-negative number
    pub fn parse_with<R: Read>(
        reader: R,
        columns: &ExposureColumns,
    ) -> Result<Self, ExposureError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(malformed)?.clone();
        let column_index = |label: &str| {
            headers.iter().position(|h| h == label).ok_or_else(|| {
                ExposureError::MalformedExposureFile(format!(
                    "missing required column '{}'",
                    label
                ))
            })
        };
        let sector_idx = column_index(&columns.sector)?;
        let value_idx = column_index(&columns.value)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(malformed)?;
            let line = record.position().map_or(0, |p| p.line());
            let field = |idx: usize| {
                record.get(idx).ok_or_else(|| {
                    ExposureError::MalformedExposureFile(format!("line {} is too short", line))
                })
            };
            let sector = field(sector_idx)?;
            let raw = field(value_idx)?;
            rows.push(ExposureRow {
                sector: sector.to_string(),
                exposure_millions: parse_value(raw, sector, line)?,
            });
        }

        Ok(Self::from_parsed(rows))
    }

    /// Open and parse a CSV file.
    pub fn from_path(path: &Path, columns: &ExposureColumns) -> Result<Self, ExposureError> {
        let file =
            File::open(path).map_err(|e| ExposureError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse_with(file, columns)
    }

    /// Build a dataset from in-memory rows, validating each value.
    ///
    /// The `line` of an [`ExposureError::InvalidExposureValue`] is the 1-based
    /// row position.
    pub fn from_rows<S, I>(rows: I) -> Result<Self, ExposureError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, (sector, value))| {
                let sector = sector.into();
                if value.is_finite() && value >= 0.0 {
                    Ok(ExposureRow {
                        sector,
                        exposure_millions: value,
                    })
                } else {
                    Err(ExposureError::InvalidExposureValue {
                        line: i as u64 + 1,
                        sector,
                        value: value.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_parsed(rows))
    }

    fn from_parsed(rows: Vec<ExposureRow>) -> Self {
        // Left-to-right sum of full-precision values.
        let total_exposure_millions = rows.iter().fold(0.0, |acc, r| acc + r.exposure_millions);
        Self {
            rows,
            total_exposure_millions,
        }
    }

    /// Rows in file order.
    pub fn rows(&self) -> &[ExposureRow] {
        &self.rows
    }

    /// Sum of all row values.
    pub fn total_exposure_millions(&self) -> f64 {
        self.total_exposure_millions
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the upload had no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn malformed(err: csv::Error) -> ExposureError {
    ExposureError::MalformedExposureFile(err.to_string())
}

fn parse_value(raw: &str, sector: &str, line: u64) -> Result<f64, ExposureError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ExposureError::InvalidExposureValue {
            line,
            sector: sector.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_default_columns() {
        let csv = "Sector,Exposure_M AUD\nFinancials,100\nReal Estate,50\n";
        let ds = ExposureDataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(ds.rows()[0].sector(), "Financials");
        assert_eq!(ds.rows()[1].exposure_millions(), 50.0);
        assert_eq!(ds.total_exposure_millions(), 150.0);
    }

    #[test]
    fn test_parse_ignores_extra_columns_and_order() {
        let csv = "Region,Exposure_M AUD,Sector\nNSW,12.5,Utilities\nVIC,7.25,Mining\n";
        let ds = ExposureDataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(ds.rows()[0].sector(), "Utilities");
        assert_relative_eq!(ds.total_exposure_millions(), 19.75);
    }

    #[test]
    fn test_parse_trims_headers_and_values() {
        let csv = " Sector , Exposure_M AUD \nEnergy, 42 \n";
        let ds = ExposureDataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(ds.total_exposure_millions(), 42.0);
    }

    #[test]
    fn test_parse_trims_sector_labels() {
        let csv = "Sector,Exposure_M AUD\n Real Estate ,50\n\"  Energy\",10\n";
        let ds = ExposureDataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(ds.rows()[0].sector(), "Real Estate");
        assert_eq!(ds.rows()[1].sector(), "Energy");
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let ds = ExposureDataset::parse("Sector,Exposure_M AUD\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.total_exposure_millions(), 0.0);
    }

    #[test]
    fn test_missing_value_column_is_malformed() {
        let csv = "Sector,Exposure\nEnergy,10\n";
        let err = ExposureDataset::parse(csv.as_bytes()).unwrap_err();
        match err {
            ExposureError::MalformedExposureFile(msg) => assert!(msg.contains("Exposure_M AUD")),
            other => panic!("Expected MalformedExposureFile, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = ExposureDataset::parse("".as_bytes()).unwrap_err();
        assert!(matches!(err, ExposureError::MalformedExposureFile(_)));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = "Sector,Exposure_M AUD\nEnergy\n";
        let err = ExposureDataset::parse(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExposureError::MalformedExposureFile(_)));
    }

    #[test]
    fn test_non_numeric_value_is_invalid() {
        let csv = "Sector,Exposure_M AUD\nEnergy,10\nMining,lots\n";
        let err = ExposureDataset::parse(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            ExposureError::InvalidExposureValue {
                line: 3,
                sector: "Mining".to_string(),
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_and_non_finite_values_are_invalid() {
        for bad in ["-1", "NaN", "inf", ""] {
            let csv = format!("Sector,Exposure_M AUD\nEnergy,{}\n", bad);
            let err = ExposureDataset::parse(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(err, ExposureError::InvalidExposureValue { .. }),
                "value '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_custom_columns() {
        let columns = ExposureColumns {
            sector: "Industry".to_string(),
            value: "Exposure_M USD".to_string(),
        };
        let csv = "Industry,Exposure_M USD\nSteel,3\n";
        let ds = ExposureDataset::parse_with(csv.as_bytes(), &columns).unwrap();
        assert_eq!(ds.total_exposure_millions(), 3.0);
    }

    #[test]
    fn test_from_rows_validates() {
        let ds = ExposureDataset::from_rows(vec![("Financials", 100.0), ("Real Estate", 50.0)])
            .unwrap();
        assert_eq!(ds.total_exposure_millions(), 150.0);

        let err = ExposureDataset::from_rows(vec![("A", 1.0), ("B", -2.0)]).unwrap_err();
        assert!(matches!(err, ExposureError::InvalidExposureValue { line: 2, .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ExposureDataset::from_path(
            Path::new("/nonexistent/exposure.csv"),
            &ExposureColumns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExposureError::Io(_)));
    }
}
