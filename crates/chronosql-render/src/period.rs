//! Period membership predicates
//!
//! The aggregated query path matches rows against a set of discrete
//! periods. Periods are bucketed by type in first-seen order; each bucket
//! becomes one IN-list on the type's own column of the analytics table.

use chronosql_model::{Period, PeriodType};
use indexmap::IndexMap;

use crate::sql::{quote_qualified, quoted_comma_list};

/// Render the period membership predicate against the analytics table
/// `alias`.
///
/// Each period type present contributes one IN-list with its uids in input
/// order, e.g. `"ax"."monthly" in ('202001','202002')`. Multiple types are
/// joined with `or` inside one parenthesis pair, and a second outer pair is
/// added so the disjunction always reads as a single term. Empty input
/// renders the empty string.
pub fn period_condition(alias: &str, periods: &[Period]) -> String {
    if periods.is_empty() {
        return String::new();
    }

    let mut by_type: IndexMap<PeriodType, Vec<&str>> = IndexMap::new();
    for period in periods {
        by_type
            .entry(period.period_type)
            .or_default()
            .push(period.uid.as_str());
    }

    let group_conditions: Vec<String> = by_type
        .iter()
        .map(|(period_type, uids)| {
            format!(
                "{} in ({})",
                quote_qualified(alias, period_type.column_name()),
                quoted_comma_list(uids.iter().copied())
            )
        })
        .collect();

    if group_conditions.len() > 1 {
        format!("(({}))", group_conditions.join(" or "))
    } else {
        group_conditions.into_iter().next().unwrap_or_default()
    }
}
