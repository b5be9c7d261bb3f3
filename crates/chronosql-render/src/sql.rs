//! SQL text helpers
//!
//! The predicates target a PostgreSQL-flavoured dialect: identifiers are
//! double-quoted, string literals single-quoted, dates rendered as
//! `YYYY-MM-DD`. Values are embedded as literals rather than bound as
//! parameters; everything that reaches these helpers comes from a closed,
//! pre-validated vocabulary of period uids and column names.

use chrono::NaiveDate;

/// Alias of the analytics table the predicates run against.
pub const ANALYTICS_TABLE_ALIAS: &str = "ax";

/// Double-quote an identifier, doubling any embedded quote character.
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote an alias-qualified identifier as `"alias"."ident"`.
pub fn quote_qualified(alias: &str, ident: &str) -> String {
    format!("{}.{}", quote(alias), quote(ident))
}

/// Render a calendar date as `YYYY-MM-DD`, zero-padded.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Join items into a single-quoted, comma-separated list: `'a','b','c'`.
///
/// No whitespace is inserted between items.
pub fn quoted_comma_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
