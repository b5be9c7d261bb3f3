//! SQL predicate rendering for chronosql temporal queries
//!
//! This crate compiles the temporal dimensions of a
//! [`TimeQuery`](chronosql_model::TimeQuery) into a single SQL boolean
//! fragment ready to be spliced into a WHERE clause. Exactly one of three
//! mutually exclusive modes applies to any query, in priority order:
//!
//! 1. a caller-supplied boundary override, passed through untouched;
//! 2. explicit start/end dates and per-field date ranges, rendered as
//!    half-open window comparisons;
//! 3. discrete period memberships, rendered as IN-lists grouped by period
//!    type.
//!
//! Column choice is delegated to a [`QueryFamily`], which decides the
//! default column per aggregation level and which time fields a caller may
//! select. Rendering is pure and infallible for the three modes above;
//! only the relationship-count subquery in [`relationship`] can fail, when
//! a referenced relationship type does not exist.
//!
//! ```
//! use chronosql_model::TimeQuery;
//! use chronosql_render::event_renderer;
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

mod error;
mod family;
mod period;
pub mod relationship;
mod renderer;
mod sql;

pub use error::{RenderError, RenderResult};
pub use family::{EnrollmentFamily, EventFamily, QueryFamily};
pub use period::period_condition;
pub use renderer::{enrollment_renderer, event_renderer, PredicateRenderer};
pub use sql::{iso_date, quote, quote_qualified, quoted_comma_list, ANALYTICS_TABLE_ALIAS};
