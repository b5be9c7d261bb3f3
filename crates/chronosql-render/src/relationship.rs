//! Relationship-count subqueries
//!
//! Backs the relationship-count indicator function: a correlated subquery
//! counting the relationships of the current tracked entity, optionally
//! constrained to a single relationship type. Unlike the predicate modes,
//! this fragment consults external metadata and can fail: a uid that does
//! not resolve in the registry is a configuration error and aborts
//! rendering.

use std::collections::HashMap;

use crate::error::{RenderError, RenderResult};
use crate::sql::ANALYTICS_TABLE_ALIAS;

/// A relationship type known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipType {
    /// Stable identifier
    pub uid: String,
    /// Human-readable name
    pub display_name: String,
}

impl RelationshipType {
    /// Create a relationship type.
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: display_name.into(),
        }
    }
}

/// Registry of relationship types, supplied by the caller.
///
/// Relationship uids come from a closed metadata vocabulary, so a lookup
/// miss means misconfiguration rather than user input to be tolerated.
pub trait RelationshipTypeStore {
    /// Resolve a relationship type by uid.
    fn relationship_type(&self, uid: &str) -> Option<RelationshipType>;
}

/// Map-backed registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRelationshipTypes {
    types: HashMap<String, RelationshipType>,
}

impl InMemoryRelationshipTypes {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship type, replacing any previous entry with the same
    /// uid.
    pub fn insert(&mut self, relationship_type: RelationshipType) {
        self.types
            .insert(relationship_type.uid.clone(), relationship_type);
    }
}

impl RelationshipTypeStore for InMemoryRelationshipTypes {
    fn relationship_type(&self, uid: &str) -> Option<RelationshipType> {
        self.types.get(uid).cloned()
    }
}

/// Render the relationship-count subquery.
///
/// With a uid the count is constrained to that relationship type; the uid
/// must resolve in `store` or rendering aborts with
/// [`RenderError::RelationshipTypeNotFound`]. Without a uid every
/// relationship of the tracked entity is counted and no lookup happens.
pub fn relationship_count_sql(
    relationship_type_uid: Option<&str>,
    store: &dyn RelationshipTypeStore,
) -> RenderResult<String> {
    let type_constraint = match relationship_type_uid {
        Some(uid) => {
            if store.relationship_type(uid).is_none() {
                return Err(RenderError::relationship_type_not_found(uid));
            }
            format!(
                " join relationshiptype rt on r.relationshiptypeid = rt.relationshiptypeid and rt.uid = '{}'",
                uid
            )
        }
        None => String::new(),
    };

    let mut sql = String::from("(select count(*) from relationship r");
    sql.push_str(&type_constraint);
    sql.push_str(" join relationshipitem rifrom on rifrom.relationshipid = r.relationshipid");
    sql.push_str(&format!(
        " join trackedentityinstance tei on rifrom.trackedentityinstanceid = tei.trackedentityinstanceid and tei.uid = {}.tei)",
        ANALYTICS_TABLE_ALIAS
    ));
    Ok(sql)
}
