//! Error types for query validation.

use thiserror::Error;

use crate::window::MIN_GRADUATION_YEAR;

/// Errors that can occur while validating a graduation-year query.
///
/// All variants are validation failures: the query pipeline never runs
/// when one of these is returned, and any prior results are preserved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The input was empty (or whitespace only).
    #[error("please enter your graduation year")]
    EmptyInput,

    /// The input could not be parsed as a year.
    #[error("'{0}' is not a valid year")]
    InvalidYear(String),

    /// The year falls outside the accepted range.
    #[error("graduation year {year} is out of range ({min}-{max})")]
    YearOutOfRange {
        year: i32,
        /// Always [`MIN_GRADUATION_YEAR`]; carried so the message is self-contained.
        min: i32,
        /// The current calendar year at validation time.
        max: i32,
    },
}

impl QueryError {
    /// Construct an out-of-range error against the standard lower bound.
    pub fn out_of_range(year: i32, current_year: i32) -> Self {
        QueryError::YearOutOfRange {
            year,
            min: MIN_GRADUATION_YEAR,
            max: current_year,
        }
    }
}
