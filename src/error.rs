//! Error types for the savings estimator

use thiserror::Error;

/// Errors produced by input parsing, strict validation, and data loading.
///
/// The compatible estimation path never returns these: degenerate inputs
/// there flow through as non-finite numbers. They surface from the strict
/// path, from the loaders, and from the outer surfaces.
#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{0} must be nonzero")]
    ZeroDivisor(&'static str),

    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
