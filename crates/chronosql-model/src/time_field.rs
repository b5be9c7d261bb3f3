//! Time fields and aggregation output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named temporal dimension of a record, mapped to exactly one physical
/// column.
///
/// Callers address time fields by their upstream parameter name (e.g.
/// `"LAST_UPDATED"`); [`TimeField::from_name`] performs that lookup and
/// yields `None` for unknown names, which downstream column resolution
/// treats as "use the family default" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeField {
    /// Date the event occurred
    EventDate,
    /// Date the enrollment was registered
    EnrollmentDate,
    /// Incident date reported for the enrollment
    IncidentDate,
    /// Date the event is due
    ScheduledDate,
    /// Date the event was completed
    CompletedDate,
    /// Row creation date
    Created,
    /// Last modification date
    LastUpdated,
}

impl TimeField {
    /// All time fields, in declaration order.
    pub const ALL: [TimeField; 7] = [
        TimeField::EventDate,
        TimeField::EnrollmentDate,
        TimeField::IncidentDate,
        TimeField::ScheduledDate,
        TimeField::CompletedDate,
        TimeField::Created,
        TimeField::LastUpdated,
    ];

    /// The physical column this field selects on.
    pub fn column(self) -> &'static str {
        match self {
            Self::EventDate => "executiondate",
            Self::EnrollmentDate => "enrollmentdate",
            Self::IncidentDate => "incidentdate",
            Self::ScheduledDate => "duedate",
            Self::CompletedDate => "completeddate",
            Self::Created => "created",
            Self::LastUpdated => "lastupdated",
        }
    }

    /// The upstream parameter name for this field (e.g. `"EVENT_DATE"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::EventDate => "EVENT_DATE",
            Self::EnrollmentDate => "ENROLLMENT_DATE",
            Self::IncidentDate => "INCIDENT_DATE",
            Self::ScheduledDate => "SCHEDULED_DATE",
            Self::CompletedDate => "COMPLETED_DATE",
            Self::Created => "CREATED",
            Self::LastUpdated => "LAST_UPDATED",
        }
    }

    /// Look up a field by its upstream parameter name.
    pub fn from_name(name: &str) -> Option<TimeField> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Aggregation level of an analytics query.
///
/// Picks the default time column when no explicit time field applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    /// One row per event
    #[default]
    Event,
    /// One row per enrollment
    Enrollment,
    /// One row per tracked entity
    TrackedEntity,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event => write!(f, "EVENT"),
            Self::Enrollment => write!(f, "ENROLLMENT"),
            Self::TrackedEntity => write!(f, "TRACKED_ENTITY"),
        }
    }
}
