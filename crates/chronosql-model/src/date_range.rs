//! Calendar date ranges and adjacency merging.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive pair of calendar dates, `start <= end`.
///
/// Ranges are day-granular wall-clock dates; no time-of-day or timezone is
/// involved. The upper bound renders half-open (`< end + 1 day`) so a stored
/// timestamp anywhere inside the end date still matches. The `start <= end`
/// invariant is validated upstream and not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range, inclusive
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The day after `end`: the exclusive upper bound of this range.
    /// Saturates at the calendar maximum.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.end.succ_opt().unwrap_or(NaiveDate::MAX)
    }

    /// True when consecutive ranges, sorted by start date, meet with no day
    /// gap: each next start is exactly the previous end plus one day.
    /// Overlapping or gapped ranges are not continuous; zero or one ranges
    /// trivially are.
    pub fn is_continuous(ranges: &[DateRange]) -> bool {
        let mut sorted = ranges.to_vec();
        sorted.sort_by_key(|range| range.start);
        sorted
            .windows(2)
            .all(|pair| pair[1].start == pair[0].end_exclusive())
    }

    /// Collapse a continuous sequence into one range spanning the earliest
    /// start to the latest end. A discontinuous sequence comes back
    /// unchanged, in input order, one entry per range.
    pub fn merge_if_continuous(ranges: &[DateRange]) -> Vec<DateRange> {
        if ranges.len() <= 1 {
            return ranges.to_vec();
        }

        let mut sorted = ranges.to_vec();
        sorted.sort_by_key(|range| range.start);

        let continuous = sorted
            .windows(2)
            .all(|pair| pair[1].start == pair[0].end_exclusive());
        if !continuous {
            return ranges.to_vec();
        }

        match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => vec![DateRange::new(first.start, last.end)],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}
