//! End-to-end tests for the query pipeline against the bundled catalog.

use hindsight_core::{
    CATALOG, QueryError, Session, TimingCategory, ViewState, run_query,
};
use pretty_assertions::assert_eq;

#[test]
fn class_of_2005_worked_example() {
    let result = run_query(CATALOG, 2005, 2025).unwrap();

    assert_eq!(result.window.start_year, 1992);
    assert_eq!(result.window.end_year, 2005);

    // Pluto (taught until 2006, changed 2006): both conditions hold against
    // the 1992 window start, so it is included even though the change came
    // after graduation. This is the documented inclusion rule, not a bug.
    let claims: Vec<&str> = result.facts.iter().map(|f| f.fact.claim).collect();
    assert!(claims.iter().any(|c| c.contains("Pluto")));

    // Everest (taught until 1990) was already outdated before 1992.
    assert!(!claims.iter().any(|c| c.contains("Everest")));
}

#[test]
fn class_of_1960_worked_example() {
    let result = run_query(CATALOG, 1960, 2025).unwrap();
    assert_eq!(result.window.start_year, 1947);

    // Everest (1990/1990) was still taught at or after 1947, so it is
    // included; the filter never requires the change to fall inside the
    // window itself. For a 1960 graduate every catalog entry qualifies.
    assert_eq!(result.facts.len(), CATALOG.len());
    assert!(
        result
            .facts
            .iter()
            .all(|f| f.timing == TimingCategory::AfterSchool)
    );
}

#[test]
fn brontosaurus_is_excluded_by_taught_until_year() {
    // Taught until 1903 but changed in 2015: the taught_until condition
    // fails against every representable window start (earliest is 1937),
    // so the 2015 correction never surfaces despite being recent.
    let result = run_query(CATALOG, 1950, 2025).unwrap();
    assert!(
        !result
            .facts
            .iter()
            .any(|f| f.fact.claim.contains("Brontosaurus")),
        "taught_until 1903 < window start 1937"
    );
}

#[test]
fn full_session_lifecycle() {
    let mut session = Session::new();
    assert_eq!(session.state(), &ViewState::AwaitingInput);

    // Invalid input first: rejected before the pipeline runs.
    assert_eq!(session.submit("", 2025), Err(QueryError::EmptyInput));
    assert_eq!(
        session.submit("199x", 2025),
        Err(QueryError::InvalidYear("199x".to_string()))
    );
    assert_eq!(session.state(), &ViewState::AwaitingInput);

    // Valid query.
    session.submit("2005", 2025).unwrap();
    let first = session.state().clone();

    // A failed follow-up leaves the first result intact.
    assert!(session.submit("1800", 2025).is_err());
    assert_eq!(session.state(), &first);

    // Reset, then a different year produces history-independent results.
    session.reset();
    assert_eq!(session.state(), &ViewState::AwaitingInput);
    let result = session.submit("1975", 2025).unwrap();
    assert_eq!(result.graduation_year, 1975);
}

#[test]
fn query_result_serializes_for_the_api() {
    let result = run_query(CATALOG, 2005, 2025).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["graduation_year"], 2005);
    assert_eq!(json["window"]["start_year"], 1992);
    assert_eq!(json["window"]["end_year"], 2005);

    let first = &json["facts"][0];
    assert!(first["claim"].is_string());
    assert!(first["correction"].is_string());
    assert!(first["subject"].is_string());
    assert!(first["timing"].is_string());
}
