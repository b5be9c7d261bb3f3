//! Temporal predicate rendering
//!
//! [`PredicateRenderer`] turns the temporal dimensions of a
//! [`TimeQuery`] into one boolean SQL fragment, dispatching to exactly one
//! of the three predicate modes per query.

use chronosql_model::{DateRange, OutputType, TimeField, TimeQuery};

use crate::family::{EnrollmentFamily, EventFamily, QueryFamily};
use crate::period::period_condition;
use crate::sql::{iso_date, ANALYTICS_TABLE_ALIAS};

/// A resolved column paired with one date range, the unit a window
/// comparison is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWithDateRange {
    column: &'static str,
    range: DateRange,
}

/// Renders the temporal predicate of a query for one family.
///
/// Rendering is pure: the same query yields byte-identical output on every
/// call, with no state carried between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateRenderer<F> {
    family: F,
}

/// Renderer for event-level queries.
pub fn event_renderer() -> PredicateRenderer<EventFamily> {
    PredicateRenderer::new(EventFamily)
}

/// Renderer for enrollment-level queries.
pub fn enrollment_renderer() -> PredicateRenderer<EnrollmentFamily> {
    PredicateRenderer::new(EnrollmentFamily)
}

impl<F: QueryFamily> PredicateRenderer<F> {
    /// Create a renderer for the given family.
    pub fn new(family: F) -> Self {
        Self { family }
    }

    /// Render the temporal predicate for `query`.
    ///
    /// A non-empty fragment comes back wrapped as `"(<predicate>) "` with a
    /// trailing space, so callers can splice it into a conjunctive WHERE
    /// clause unconditionally. A query with no temporal dimension renders
    /// the empty string.
    pub fn render(&self, query: &TimeQuery) -> String {
        let condition = if query.has_non_default_boundaries() {
            self.family.boundary_condition(query).unwrap_or_default()
        } else if query.has_start_end_date() || query.has_time_date_ranges() {
            self.date_range_condition(query)
        } else {
            // Discrete periods only apply when no other temporal shape is
            // present.
            period_condition(ANALYTICS_TABLE_ALIAS, &query.periods)
        };

        if condition.is_empty() {
            condition
        } else {
            format!("({}) ", condition)
        }
    }

    /// All explicit-range comparisons joined with `or`: the bare start/end
    /// window first, then each time field's normalized ranges in query
    /// order.
    fn date_range_condition(&self, query: &TimeQuery) -> String {
        let mut conditions: Vec<String> = Vec::new();

        if let Some(range) = query.start_end_range() {
            let column = self.resolve_column(self.declared_time_field(query), query.output_type);
            conditions.push(range_condition(ColumnWithDateRange { column, range }));
        }

        for (field, ranges) in &query.time_date_ranges {
            let column = self.resolve_column(Some(*field), query.output_type);
            for range in DateRange::merge_if_continuous(ranges) {
                conditions.push(range_condition(ColumnWithDateRange { column, range }));
            }
        }

        conditions.join(" or ")
    }

    /// The time field the caller declared by name, when it parses to a
    /// known field. Allowed-set filtering happens in
    /// [`resolve_column`](Self::resolve_column).
    fn declared_time_field(&self, query: &TimeQuery) -> Option<TimeField> {
        query.time_field.as_deref().and_then(TimeField::from_name)
    }

    /// Resolve a time field to its column, falling back to the family
    /// default when the field is absent or outside the allowed set.
    /// Callers rely on the fallback, so this never errors.
    fn resolve_column(&self, time_field: Option<TimeField>, output_type: OutputType) -> &'static str {
        time_field
            .filter(|field| self.family.allowed_time_fields().contains(field))
            .map(TimeField::column)
            .unwrap_or_else(|| self.family.default_column(output_type))
    }
}

/// One window comparison: `(col >= 'start' and col < 'end + 1 day')`.
///
/// The strict upper bound on the day after the range end keeps the whole
/// end date inside the window regardless of the stored time component.
fn range_condition(column_range: ColumnWithDateRange) -> String {
    format!(
        "({} >= '{}' and {} < '{}')",
        column_range.column,
        iso_date(column_range.range.start),
        column_range.column,
        iso_date(column_range.range.end_exclusive()),
    )
}
