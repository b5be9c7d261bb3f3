//! Temporal query model for chronosql
//!
//! This crate defines the immutable value objects a temporal predicate is
//! compiled from: time fields and their physical columns, calendar date
//! ranges, discrete periods, and the query surface that carries them.
//! Everything here is constructed fresh per compilation call and never
//! mutated by rendering.

mod date_range;
mod period;
mod query;
mod time_field;

pub use date_range::*;
pub use period::*;
pub use query::*;
pub use time_field::*;
