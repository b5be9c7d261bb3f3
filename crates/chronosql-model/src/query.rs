//! The temporal surface of an analytics query.

use crate::{DateRange, OutputType, Period, TimeField};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Temporal dimensions of one analytics query.
///
/// Exactly one of three shapes drives predicate rendering: a pre-built
/// boundary fragment, explicit dates/ranges, or discrete periods. The
/// renderer picks the mode; this struct only carries the inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeQuery {
    /// Pre-built boundary predicate overriding all date-range and period
    /// logic (program-indicator boundaries)
    pub boundary_sql: Option<String>,
    /// Explicit window start
    pub start_date: Option<NaiveDate>,
    /// Explicit window end, inclusive
    pub end_date: Option<NaiveDate>,
    /// Requested time field, by upstream name; unknown or disallowed names
    /// fall back to the family default column
    pub time_field: Option<String>,
    /// Per-field date ranges; entry order is first-seen, range order within
    /// a field is the caller's
    pub time_date_ranges: IndexMap<TimeField, Vec<DateRange>>,
    /// Discrete periods, for aggregated queries
    pub periods: Vec<Period>,
    /// Aggregation level, used for default-column resolution
    pub output_type: OutputType,
}

impl TimeQuery {
    /// Create an empty query: no boundaries, no dates, no periods.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a caller-supplied boundary fragment overrides all other
    /// temporal logic.
    pub fn has_non_default_boundaries(&self) -> bool {
        self.boundary_sql.is_some()
    }

    /// True when both explicit window bounds are present.
    pub fn has_start_end_date(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// True when at least one time field carries date ranges.
    pub fn has_time_date_ranges(&self) -> bool {
        !self.time_date_ranges.is_empty()
    }

    /// True when the query carries discrete periods.
    pub fn has_periods(&self) -> bool {
        !self.periods.is_empty()
    }

    /// The explicit window as a range, when both bounds are present.
    pub fn start_end_range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Set the boundary override fragment.
    pub fn with_boundary_sql(mut self, sql: impl Into<String>) -> Self {
        self.boundary_sql = Some(sql.into());
        self
    }

    /// Set the explicit window bounds.
    pub fn with_start_end(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set the requested time field by upstream name.
    pub fn with_time_field(mut self, name: impl Into<String>) -> Self {
        self.time_field = Some(name.into());
        self
    }

    /// Add date ranges for one time field.
    pub fn with_date_ranges(mut self, field: TimeField, ranges: Vec<DateRange>) -> Self {
        self.time_date_ranges.insert(field, ranges);
        self
    }

    /// Set the period list.
    pub fn with_periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = periods;
        self
    }

    /// Set the aggregation level.
    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PeriodType;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_query_has_nothing() {
        let query = TimeQuery::new();
        assert!(!query.has_non_default_boundaries());
        assert!(!query.has_start_end_date());
        assert!(!query.has_time_date_ranges());
        assert!(!query.has_periods());
        assert_eq!(query.start_end_range(), None);
    }

    #[test]
    fn test_start_end_requires_both_bounds() {
        let mut query = TimeQuery::new();
        query.start_date = Some(date(2020, 1, 1));
        assert!(!query.has_start_end_date());
        assert_eq!(query.start_end_range(), None);

        query.end_date = Some(date(2020, 1, 31));
        assert!(query.has_start_end_date());
        assert_eq!(
            query.start_end_range(),
            Some(DateRange::new(date(2020, 1, 1), date(2020, 1, 31)))
        );
    }

    #[test]
    fn test_fluent_builders() {
        let query = TimeQuery::new()
            .with_start_end(date(2020, 1, 1), date(2020, 1, 31))
            .with_time_field("LAST_UPDATED")
            .with_date_ranges(
                TimeField::EnrollmentDate,
                vec![DateRange::new(date(2020, 2, 1), date(2020, 2, 29))],
            )
            .with_output_type(OutputType::Enrollment);

        assert!(query.has_start_end_date());
        assert!(query.has_time_date_ranges());
        assert_eq!(query.time_field.as_deref(), Some("LAST_UPDATED"));
        assert_eq!(query.output_type, OutputType::Enrollment);
    }

    #[test]
    fn test_deserialize_full_query() {
        let json = r#"{
            "start_date": "2020-01-01",
            "end_date": "2020-01-31",
            "time_field": "SCHEDULED_DATE",
            "time_date_ranges": {
                "ENROLLMENT_DATE": [
                    {"start": "2020-02-01", "end": "2020-02-10"},
                    {"start": "2020-02-11", "end": "2020-02-20"}
                ]
            },
            "periods": [
                {"period_type": "MONTHLY", "uid": "202001"}
            ],
            "output_type": "ENROLLMENT"
        }"#;

        let query: TimeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.start_date, Some(date(2020, 1, 1)));
        assert_eq!(query.time_field.as_deref(), Some("SCHEDULED_DATE"));
        assert_eq!(query.time_date_ranges.len(), 1);
        assert_eq!(
            query.time_date_ranges[&TimeField::EnrollmentDate],
            vec![
                DateRange::new(date(2020, 2, 1), date(2020, 2, 10)),
                DateRange::new(date(2020, 2, 11), date(2020, 2, 20)),
            ]
        );
        assert_eq!(query.periods, vec![Period::new(PeriodType::Monthly, "202001")]);
        assert_eq!(query.output_type, OutputType::Enrollment);
    }

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let query: TimeQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, TimeQuery::default());
    }

    #[test]
    fn test_serialize_round_trip() {
        let query = TimeQuery::new()
            .with_start_end(date(2020, 1, 1), date(2020, 1, 31))
            .with_periods(vec![Period::new(PeriodType::Daily, "20200101")]);

        let json = serde_json::to_string(&query).unwrap();
        let back: TimeQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
