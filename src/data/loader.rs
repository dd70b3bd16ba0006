//! CSV Data Loader Module
//! Loads a delimited text file into a DataFrame using Polars.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failed to load CSV '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: PolarsError,
    },
}

/// Load a CSV file from `path` into a DataFrame.
///
/// A missing, unreadable, or malformed file is a [`DataLoadError`]. Parsing
/// is strict: a file that is not valid delimited tabular text does not load.
/// Row order in the frame matches line order in the file.
pub fn load_csv(path: &str) -> Result<DataFrame, DataLoadError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()
        .and_then(|lazy| lazy.collect())
        .map_err(|source| DataLoadError::Csv {
            path: path.to_string(),
            source,
        })?;

    log::info!(
        "loaded {}: {} rows, {} columns",
        path,
        df.height(),
        df.width()
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Write `contents` to a uniquely named file in the system temp dir.
    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("physplot_{}_{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_csv_row_count_matches_data_lines() {
        let path = write_temp_csv("pv.csv", "V,P\n1,3\n2,2\n3,1\n");
        let df = load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.get_column_names().len(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_csv_header_only_gives_empty_frame() {
        let path = write_temp_csv("empty.csv", "V,P\n");
        let df = load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_csv_missing_file_is_error() {
        let err = load_csv("/nonexistent/physplot_missing.csv").unwrap_err();
        assert!(err.to_string().contains("physplot_missing.csv"));
    }

    #[test]
    fn test_round_trip_csv_to_chart_keeps_order() {
        use crate::charts::PvChart;
        use crate::data::numeric_column;

        let path = write_temp_csv("roundtrip.csv", "V,P\n1,3\n2,2\n3,1\n");
        let df = load_csv(path.to_str().unwrap()).unwrap();
        let chart = PvChart::new(
            numeric_column(&df, "V").unwrap(),
            numeric_column(&df, "P").unwrap(),
        )
        .unwrap();
        assert_eq!(chart.points(), &[[1.0, 3.0], [2.0, 2.0], [3.0, 1.0]]);
        std::fs::remove_file(path).ok();
    }
}
