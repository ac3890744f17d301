//! Fact catalog and eligibility engine for Hindsight.
//!
//! This crate provides the domain logic behind the "what you learned wrong"
//! page:
//! - A static catalog of facts that were taught as true and later corrected
//! - School-window derivation from a graduation year
//! - The eligibility filter and sort over the catalog
//! - Timeline-position computation for rendering
//! - An explicit session state machine for the submit/reset lifecycle

mod catalog;
mod engine;
mod error;
mod session;
mod window;

pub use catalog::{CATALOG, FactRecord, Subject};
pub use engine::{
    AggregateTimeline, MARKER_HORIZON_YEARS, QueryResult, ResultFact, TimingCategory,
    filter_relevant_facts, marker_position, run_query,
};
pub use error::QueryError;
pub use session::{Session, ViewState, parse_graduation_year};
pub use window::{
    MIN_GRADUATION_YEAR, SCHOOL_SPAN_YEARS, SchoolWindow, current_year, derive_school_window,
};
