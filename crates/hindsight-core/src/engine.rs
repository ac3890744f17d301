//! Eligibility filter and timeline layout.
//!
//! Everything here is a pure function of its inputs: the same catalog and
//! window always produce the same result, which keeps the pipeline testable
//! independent of any UI.

use serde::Serialize;
use tracing::debug;

use crate::catalog::FactRecord;
use crate::error::QueryError;
use crate::window::{SchoolWindow, derive_school_window};

/// How far past graduation a per-fact change marker stays visible.
pub const MARKER_HORIZON_YEARS: i32 = 10;

/// When a fact's correction happened relative to the school window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingCategory {
    BeforeSchool,
    DuringSchool,
    AfterSchool,
}

impl TimingCategory {
    /// Classify a correction year against a school window.
    pub fn classify(changed_year: i32, window: SchoolWindow) -> TimingCategory {
        if changed_year < window.start_year {
            TimingCategory::BeforeSchool
        } else if changed_year <= window.end_year {
            TimingCategory::DuringSchool
        } else {
            TimingCategory::AfterSchool
        }
    }
}

/// A catalog entry annotated with its timing relative to a school window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultFact {
    #[serde(flatten)]
    pub fact: FactRecord,
    /// When the correction happened relative to the window.
    pub timing: TimingCategory,
    /// Normalized marker position in `[0, 1]` on the per-fact mini-timeline,
    /// or `None` when the correction falls outside the display horizon.
    pub marker: Option<f64>,
}

/// The full derived output of one submission. Recomputed per query and
/// discarded on reset; nothing here outlives the submission that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub graduation_year: i32,
    pub window: SchoolWindow,
    pub facts: Vec<ResultFact>,
}

impl QueryResult {
    /// Aggregate timeline span for these results, or `None` when empty.
    pub fn aggregate_timeline(&self) -> Option<AggregateTimeline> {
        AggregateTimeline::new(&self.facts, self.window)
    }
}

/// Select the catalog entries relevant to a school window.
///
/// A fact is included iff it was still taught at or after the window start
/// AND its correction happened at or after the window start. Corrections
/// that happened years after graduation are deliberately included; only
/// facts that became outdated entirely before the user started school are
/// excluded. Output is sorted ascending by `changed_year`, with ties kept
/// in catalog order.
pub fn filter_relevant_facts(
    catalog: &[FactRecord],
    window: SchoolWindow,
) -> Vec<&FactRecord> {
    let mut facts: Vec<&FactRecord> = catalog
        .iter()
        .filter(|f| {
            f.taught_until_year >= window.start_year && f.changed_year >= window.start_year
        })
        .collect();

    // Stable sort: catalog order breaks ties.
    facts.sort_by_key(|f| f.changed_year);
    facts
}

/// Normalized position of a change marker on the per-fact mini-timeline.
///
/// - `None` when the correction predates the window or falls more than
///   [`MARKER_HORIZON_YEARS`] past graduation (not rendered).
/// - Pinned to `1.0` for corrections after graduation but within the
///   horizon: post-graduation changes anchor at the window boundary rather
///   than extrapolating past it.
/// - Otherwise `(changed_year - start) / span`, with zero-length spans
///   yielding `0.0` instead of dividing by zero.
pub fn marker_position(changed_year: i32, window: SchoolWindow) -> Option<f64> {
    if changed_year < window.start_year
        || changed_year > window.end_year + MARKER_HORIZON_YEARS
    {
        return None;
    }

    if changed_year > window.end_year {
        return Some(1.0);
    }

    let span = window.span();
    if span == 0 {
        return Some(0.0);
    }

    Some(f64::from(changed_year - window.start_year) / f64::from(span))
}

/// Normalization span for the all-facts timeline.
///
/// Unlike the per-fact mini-timeline, this span stretches to cover every
/// correction year in the result set, so it may extend beyond the school
/// window itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateTimeline {
    pub min_year: i32,
    pub max_year: i32,
}

impl AggregateTimeline {
    /// Build the span covering the window and every result's change year.
    /// Returns `None` for an empty result set.
    pub fn new(facts: &[ResultFact], window: SchoolWindow) -> Option<AggregateTimeline> {
        if facts.is_empty() {
            return None;
        }

        let mut min_year = window.start_year;
        let mut max_year = window.end_year;
        for f in facts {
            min_year = min_year.min(f.fact.changed_year);
            max_year = max_year.max(f.fact.changed_year);
        }

        Some(AggregateTimeline { min_year, max_year })
    }

    /// Normalized position of a year within the span, clamped to `[0, 1]`.
    pub fn position(&self, year: i32) -> f64 {
        let span = self.max_year - self.min_year;
        if span == 0 {
            return 0.0;
        }
        (f64::from(year - self.min_year) / f64::from(span)).clamp(0.0, 1.0)
    }
}

/// Run the full pipeline: validate, derive the window, filter, annotate.
pub fn run_query(
    catalog: &[FactRecord],
    graduation_year: i32,
    current_year: i32,
) -> Result<QueryResult, QueryError> {
    let window = derive_school_window(graduation_year, current_year)?;

    let facts: Vec<ResultFact> = filter_relevant_facts(catalog, window)
        .into_iter()
        .map(|fact| ResultFact {
            fact: *fact,
            timing: TimingCategory::classify(fact.changed_year, window),
            marker: marker_position(fact.changed_year, window),
        })
        .collect();

    debug!(
        graduation_year,
        start = window.start_year,
        end = window.end_year,
        count = facts.len(),
        "ran catalog query"
    );

    Ok(QueryResult {
        graduation_year,
        window,
        facts,
    })
}
