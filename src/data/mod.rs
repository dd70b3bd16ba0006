//! Data module - CSV loading and column derivation

mod loader;
mod transform;

pub use loader::{load_csv, DataLoadError};
pub use transform::{
    era_column, log_rescale, numeric_column, Era, TypeConversionError, LOG_EPSILON,
};
