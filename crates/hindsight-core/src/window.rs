//! School-window derivation.

use chrono::Datelike;
use serde::Serialize;

use crate::error::QueryError;

/// Modeled K-12 schooling span in years: a window covers 14 calendar years,
/// `[graduation_year - 13, graduation_year]`.
pub const SCHOOL_SPAN_YEARS: i32 = 13;

/// Earliest accepted graduation year.
pub const MIN_GRADUATION_YEAR: i32 = 1950;

/// The 14-year interval a graduation year implies. Derived per query,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchoolWindow {
    /// First year of schooling (`graduation_year - 13`).
    pub start_year: i32,
    /// Graduation year.
    pub end_year: i32,
}

impl SchoolWindow {
    /// Length of the window in years.
    pub fn span(&self) -> i32 {
        self.end_year - self.start_year
    }

    /// Whether a year falls inside the window (inclusive on both ends).
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

/// Derive the school window for a graduation year.
///
/// Returns [`QueryError::YearOutOfRange`] when the year falls outside
/// `[MIN_GRADUATION_YEAR, current_year]`; the window is never computed for
/// invalid input.
pub fn derive_school_window(
    graduation_year: i32,
    current_year: i32,
) -> Result<SchoolWindow, QueryError> {
    if graduation_year < MIN_GRADUATION_YEAR || graduation_year > current_year {
        return Err(QueryError::out_of_range(graduation_year, current_year));
    }

    Ok(SchoolWindow {
        start_year: graduation_year - SCHOOL_SPAN_YEARS,
        end_year: graduation_year,
    })
}

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // === Unit Tests ===

    #[test]
    fn window_for_2005() {
        let window = derive_school_window(2005, 2025).unwrap();
        assert_eq!(window.start_year, 1992);
        assert_eq!(window.end_year, 2005);
    }

    #[test]
    fn window_at_lower_bound() {
        let window = derive_school_window(MIN_GRADUATION_YEAR, 2025).unwrap();
        assert_eq!(window.start_year, 1937);
        assert_eq!(window.end_year, 1950);
    }

    #[test]
    fn window_at_current_year() {
        let window = derive_school_window(2025, 2025).unwrap();
        assert_eq!(window.end_year, 2025);
    }

    #[test]
    fn rejects_year_below_range() {
        let err = derive_school_window(1949, 2025).unwrap_err();
        assert_eq!(
            err,
            QueryError::YearOutOfRange {
                year: 1949,
                min: 1950,
                max: 2025
            }
        );
    }

    #[test]
    fn rejects_year_in_future() {
        assert!(derive_school_window(2026, 2025).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let window = derive_school_window(2005, 2025).unwrap();
        assert!(window.contains(1992));
        assert!(window.contains(2005));
        assert!(!window.contains(1991));
        assert!(!window.contains(2006));
    }

    // === Property-Based Tests ===

    proptest! {
        // Every valid graduation year yields a window spanning exactly 13 years.
        #[test]
        fn span_is_always_thirteen(year in MIN_GRADUATION_YEAR..=2025) {
            let window = derive_school_window(year, 2025).unwrap();
            prop_assert_eq!(window.span(), SCHOOL_SPAN_YEARS);
            prop_assert_eq!(window.end_year, year);
        }

        // Invalid years never produce a window.
        #[test]
        fn out_of_range_always_rejected(year in prop_oneof![-10000i32..MIN_GRADUATION_YEAR, 2026i32..10000]) {
            prop_assert!(derive_school_window(year, 2025).is_err());
        }
    }
}
