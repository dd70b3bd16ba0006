//! Column Derivation Module
//! Numeric coercion, logarithmic rescaling, and era classification.

use polars::prelude::*;
use thiserror::Error;

/// Offset added to |x| before taking log10, so zero-valued samples map to
/// a finite value (-60) instead of an undefined logarithm.
pub const LOG_EPSILON: f64 = 1e-60;

#[derive(Error, Debug)]
pub enum TypeConversionError {
    #[error("column lookup failed: {0}")]
    Column(#[from] PolarsError),
    #[error("column '{column}' row {row}: value '{value}' is not numeric")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("column '{column}' row {row}: missing value")]
    Missing { column: String, row: usize },
    #[error("column '{column}' has non-numeric dtype {dtype}")]
    UnsupportedDtype { column: String, dtype: DataType },
}

/// Extract a column as `f64` values, coercing from strings where needed.
///
/// Numeric columns are cast; string columns are trimmed and parsed per
/// value. Any value that does not convert fails the whole extraction, so a
/// bad cell surfaces before any chart is built. Row order is preserved and
/// the output length always equals the frame height.
pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, TypeConversionError> {
    let col = df.column(name)?;

    match col.dtype() {
        DataType::String => {
            let ca = col.as_materialized_series().str()?;
            let mut values = Vec::with_capacity(ca.len());
            for (row, opt) in ca.into_iter().enumerate() {
                let raw = opt.ok_or_else(|| TypeConversionError::Missing {
                    column: name.to_string(),
                    row,
                })?;
                let parsed =
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| TypeConversionError::NotNumeric {
                            column: name.to_string(),
                            row,
                            value: raw.to_string(),
                        })?;
                values.push(parsed);
            }
            Ok(values)
        }
        DataType::Float32
        | DataType::Float64
        | DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => {
            let cast = col.cast(&DataType::Float64)?;
            let ca = cast.f64()?;
            let mut values = Vec::with_capacity(ca.len());
            for (row, opt) in ca.into_iter().enumerate() {
                let v = opt.ok_or_else(|| TypeConversionError::Missing {
                    column: name.to_string(),
                    row,
                })?;
                values.push(v);
            }
            Ok(values)
        }
        other => Err(TypeConversionError::UnsupportedDtype {
            column: name.to_string(),
            dtype: other.clone(),
        }),
    }
}

/// Element-wise `log10(|x| + LOG_EPSILON)`.
///
/// Spreads values that vary over many decades onto a readable axis. The
/// output has the same length and order as the input; zero maps to exactly
/// -60.
pub fn log_rescale(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|v| (v.abs() + LOG_EPSILON).log10())
        .collect()
}

/// Cosmological era tag derived from the `Era` column.
///
/// The classification is a binary predicate: the trimmed cell must equal
/// `"radiation"` exactly (case-sensitive) to count as radiation; everything
/// else, including misspellings and empty cells, falls back to matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Radiation,
    Matter,
}

impl Era {
    pub fn classify(raw: &str) -> Era {
        if raw.trim() == "radiation" {
            Era::Radiation
        } else {
            Era::Matter
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Era::Radiation => "Radiation Era",
            Era::Matter => "Matter Era",
        }
    }
}

/// Classify every row of a string column into an [`Era`].
///
/// Null cells classify as matter, consistent with the permissive fallback.
pub fn era_column(df: &DataFrame, name: &str) -> Result<Vec<Era>, TypeConversionError> {
    let col = df.column(name)?;
    let ca = col.as_materialized_series().str()?;
    Ok(ca
        .into_iter()
        .map(|opt| Era::classify(opt.unwrap_or("")))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_log_rescale_values() {
        let out = log_rescale(&[0.0, 100.0, -5.0]);
        assert_eq!(out.len(), 3);
        assert!((out[0] - (-60.0)).abs() < 1e-9);
        assert!((out[1] - 2.0).abs() < 1e-9);
        assert!((out[2] - 5.0_f64.log10()).abs() < 1e-9);
        assert!((out[2] - 0.699).abs() < 1e-3);
    }

    #[test]
    fn test_log_rescale_preserves_length_and_order() {
        let input: Vec<f64> = (0..50).map(|i| i as f64 * 1e-12).collect();
        let out = log_rescale(&input);
        assert_eq!(out.len(), input.len());
        // Monotone input stays monotone: no reordering happens.
        for w in out.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_era_classify_is_case_sensitive_binary() {
        assert_eq!(Era::classify("radiation"), Era::Radiation);
        assert_eq!(Era::classify("  radiation "), Era::Radiation);
        assert_eq!(Era::classify("Radiation"), Era::Matter);
        assert_eq!(Era::classify("matter"), Era::Matter);
        assert_eq!(Era::classify(""), Era::Matter);
        assert_eq!(Era::classify("N/A"), Era::Matter);
    }

    #[test]
    fn test_numeric_column_from_floats() {
        let df = df!("P" => [3.0, 2.0, 1.0]).unwrap();
        let values = numeric_column(&df, "P").unwrap();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_numeric_column_coerces_strings() {
        let df = df!("phi" => ["0", " 1e-30 ", "-5"]).unwrap();
        let values = numeric_column(&df, "phi").unwrap();
        assert_eq!(values, vec![0.0, 1e-30, -5.0]);
    }

    #[test]
    fn test_numeric_column_rejects_non_numeric() {
        let df = df!("phi" => ["1.0", "N/A", "3.0"]).unwrap();
        let err = numeric_column(&df, "phi").unwrap_err();
        match err {
            TypeConversionError::NotNumeric { column, row, value } => {
                assert_eq!(column, "phi");
                assert_eq!(row, 1);
                assert_eq!(value, "N/A");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_numeric_column_missing_column_is_error() {
        let df = df!("V" => [1.0]).unwrap();
        assert!(numeric_column(&df, "P").is_err());
    }

    #[test]
    fn test_era_column_classifies_rows_in_order() {
        let df = df!("Era" => ["radiation", "Radiation", "matter", "junk"]).unwrap();
        let eras = era_column(&df, "Era").unwrap();
        assert_eq!(
            eras,
            vec![Era::Radiation, Era::Matter, Era::Matter, Era::Matter]
        );
    }

    #[test]
    fn test_scenario_capital_r_row() {
        // A row phi=0, Potential=100, Kinetic=-5, Era="Radiation" classifies
        // as matter and log-rescales to (-60, 2, ~0.699).
        let df = df!(
            "Era" => ["Radiation"],
            "phi" => ["0"],
            "Potential" => ["100"],
            "Kinetic" => ["-5"]
        )
        .unwrap();

        let eras = era_column(&df, "Era").unwrap();
        assert_eq!(eras, vec![Era::Matter]);

        let phi = log_rescale(&numeric_column(&df, "phi").unwrap());
        let pot = log_rescale(&numeric_column(&df, "Potential").unwrap());
        let kin = log_rescale(&numeric_column(&df, "Kinetic").unwrap());
        assert!((phi[0] + 60.0).abs() < 1e-9);
        assert!((pot[0] - 2.0).abs() < 1e-9);
        assert!((kin[0] - 0.699).abs() < 1e-3);
    }
}
