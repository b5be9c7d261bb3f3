//! Render error types

use thiserror::Error;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while rendering SQL fragments.
///
/// The three predicate modes render infallibly; errors only come out of
/// fragments that consult external metadata, such as the relationship-count
/// subquery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A referenced relationship type does not exist in the registry
    #[error("Relationship type {uid} not found")]
    RelationshipTypeNotFound {
        /// Uid the caller asked for
        uid: String,
    },
}

impl RenderError {
    /// Create a relationship-type-not-found error
    pub fn relationship_type_not_found(uid: impl Into<String>) -> Self {
        Self::RelationshipTypeNotFound { uid: uid.into() }
    }
}
