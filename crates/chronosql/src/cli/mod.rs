//! CLI functionality for the chronosql tool
//!
//! This module contains all CLI-related functionality including:
//! - Predicate rendering
//! - Query validation
//! - Time field listing
//! - Output formatting

#[cfg(feature = "cli")]
pub mod fields;
#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod render;
#[cfg(feature = "cli")]
pub mod validate;
