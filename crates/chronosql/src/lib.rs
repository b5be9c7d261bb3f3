//! Temporal SQL predicate compiler for analytics queries
//!
//! chronosql turns the temporal dimensions of an analytics query into a
//! single SQL boolean predicate:
//! - caller-supplied boundary fragments pass through untouched;
//! - explicit start/end dates and per-field date ranges become half-open
//!   window comparisons, with adjacent ranges collapsed;
//! - discrete periods become IN-lists grouped by period type.
//!
//! # Example
//!
//! ```
//! use chronosql::{event_renderer, TimeQuery};
//! use chrono::NaiveDate;
//!
//! let query = TimeQuery::new().with_start_end(
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
//! );
//! let sql = event_renderer().render(&query);
//! assert_eq!(
//!     sql,
//!     "((executiondate >= '2020-01-01' and executiondate < '2020-02-01')) "
//! );
//! ```

// Re-export the public APIs of the internal crates
pub use chronosql_model as model;
pub use chronosql_render as render;

// Convenience re-exports
pub use chronosql_model::{DateRange, OutputType, Period, PeriodType, TimeField, TimeQuery};
pub use chronosql_render::{
    enrollment_renderer, event_renderer, EnrollmentFamily, EventFamily, PredicateRenderer,
    QueryFamily, RenderError, RenderResult,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
