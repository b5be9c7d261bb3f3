//! Query families
//!
//! A family is the per-context seam of the renderer: it decides which time
//! fields a caller may select, which column stands in by default for each
//! aggregation level, and where a boundary override comes from. Event-level
//! analytics expose the full field set; enrollment-level analytics only the
//! enrollment-scoped fields.

use chronosql_model::{OutputType, TimeField, TimeQuery};

/// Rendering capabilities of one query family.
pub trait QueryFamily {
    /// Default column for the given aggregation level, used whenever no
    /// explicit, allowed time field applies.
    fn default_column(&self, output_type: OutputType) -> &'static str;

    /// Time fields callers may select in this family.
    ///
    /// A field outside this set never causes an error; resolution silently
    /// falls back to [`default_column`](Self::default_column). Callers rely
    /// on that leniency.
    fn allowed_time_fields(&self) -> &'static [TimeField];

    /// Boundary override predicate, when the query carries one.
    fn boundary_condition(&self, query: &TimeQuery) -> Option<String> {
        query.boundary_sql.clone()
    }
}

/// Event-level queries. Every time field is selectable; the default column
/// follows the aggregation level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFamily;

impl QueryFamily for EventFamily {
    fn default_column(&self, output_type: OutputType) -> &'static str {
        match output_type {
            OutputType::Enrollment => TimeField::EnrollmentDate.column(),
            OutputType::Event | OutputType::TrackedEntity => TimeField::EventDate.column(),
        }
    }

    fn allowed_time_fields(&self) -> &'static [TimeField] {
        &TimeField::ALL
    }
}

/// Enrollment-level queries. Only enrollment-scoped fields are selectable
/// and the default column is the enrollment date at every aggregation
/// level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentFamily;

impl QueryFamily for EnrollmentFamily {
    fn default_column(&self, _output_type: OutputType) -> &'static str {
        TimeField::EnrollmentDate.column()
    }

    fn allowed_time_fields(&self) -> &'static [TimeField] {
        const ALLOWED: [TimeField; 3] = [
            TimeField::EnrollmentDate,
            TimeField::IncidentDate,
            TimeField::LastUpdated,
        ];
        &ALLOWED
    }
}
