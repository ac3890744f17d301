//! Interactive session state.
//!
//! Models the page lifecycle as an explicit state machine: awaiting input,
//! or showing the results of the last valid submission. Validation failures
//! never touch the current state, and reset always returns to the initial
//! state.

use crate::catalog::{CATALOG, FactRecord};
use crate::engine::{QueryResult, run_query};
use crate::error::QueryError;

/// What the UI should currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No query has run yet (or the session was reset).
    AwaitingInput,
    /// A query ran; the result set may be empty, which is a distinct,
    /// displayable state rather than a return to `AwaitingInput`.
    Results(QueryResult),
}

/// One interactive session over the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    catalog: &'static [FactRecord],
    state: ViewState,
}

impl Session {
    /// Start a session over the bundled catalog.
    pub fn new() -> Session {
        Session::with_catalog(CATALOG)
    }

    /// Start a session over a specific catalog (used by tests).
    pub fn with_catalog(catalog: &'static [FactRecord]) -> Session {
        Session {
            catalog,
            state: ViewState::AwaitingInput,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Submit raw text input. On success the state is replaced wholesale
    /// with the new results; on any validation failure the prior state is
    /// left untouched.
    pub fn submit(&mut self, input: &str, current_year: i32) -> Result<&QueryResult, QueryError> {
        let year = parse_graduation_year(input)?;
        let result = run_query(self.catalog, year, current_year)?;
        self.state = ViewState::Results(result);

        match &self.state {
            ViewState::Results(result) => Ok(result),
            ViewState::AwaitingInput => unreachable!("state was just set to Results"),
        }
    }

    /// Clear all derived state back to the initial awaiting-input state.
    pub fn reset(&mut self) {
        self.state = ViewState::AwaitingInput;
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

/// Parse raw year input: trimmed, non-empty, numeric. Range checking is the
/// window derivation's job, not the parser's.
pub fn parse_graduation_year(input: &str) -> Result<i32, QueryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyInput);
    }

    trimmed
        .parse::<i32>()
        .map_err(|_| QueryError::InvalidYear(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn starts_awaiting_input() {
        let session = Session::new();
        assert_eq!(session.state(), &ViewState::AwaitingInput);
    }

    #[test]
    fn valid_submit_produces_results() {
        let mut session = Session::new();
        let result = session.submit("2005", 2025).unwrap();
        assert_eq!(result.graduation_year, 2005);
        assert!(matches!(session.state(), ViewState::Results(_)));
    }

    #[test]
    fn failed_submit_preserves_prior_results() {
        let mut session = Session::new();
        session.submit("2005", 2025).unwrap();
        let before = session.clone();

        assert!(session.submit("1949", 2025).is_err());
        assert!(session.submit("not a year", 2025).is_err());
        assert!(session.submit("", 2025).is_err());

        assert_eq!(session, before);
    }

    #[test]
    fn failed_submit_on_fresh_session_stays_awaiting() {
        let mut session = Session::new();
        assert!(session.submit("99999", 2025).is_err());
        assert_eq!(session.state(), &ViewState::AwaitingInput);
    }

    #[test]
    fn reset_returns_to_awaiting_input() {
        let mut session = Session::new();
        session.submit("2005", 2025).unwrap();
        session.reset();
        assert_eq!(session.state(), &ViewState::AwaitingInput);
    }

    #[test]
    fn queries_are_independent_of_history() {
        let mut fresh = Session::new();
        fresh.submit("1998", 2025).unwrap();

        let mut reused = Session::new();
        reused.submit("2012", 2025).unwrap();
        reused.reset();
        reused.submit("1998", 2025).unwrap();

        assert_eq!(fresh.state(), reused.state());
    }

    #[test]
    fn empty_results_are_distinct_from_awaiting() {
        static EMPTY_ERA: &[FactRecord] = &[];
        let mut session = Session::with_catalog(EMPTY_ERA);
        session.submit("2005", 2025).unwrap();
        match session.state() {
            ViewState::Results(result) => assert!(result.facts.is_empty()),
            ViewState::AwaitingInput => panic!("empty results should still be Results"),
        }
    }

    #[test_case("2005", Ok(2005))]
    #[test_case("  1987  ", Ok(1987); "trims whitespace")]
    #[test_case("", Err(QueryError::EmptyInput))]
    #[test_case("   ", Err(QueryError::EmptyInput); "whitespace only")]
    #[test_case("soon", Err(QueryError::InvalidYear("soon".to_string())))]
    #[test_case("20.5", Err(QueryError::InvalidYear("20.5".to_string())); "rejects floats")]
    fn parse_input(input: &str, expected: Result<i32, QueryError>) {
        assert_eq!(parse_graduation_year(input), expected);
    }
}
