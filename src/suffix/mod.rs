//! Public suffix rules and matching.
//!
//! This module provides:
//! - `SuffixRule`: one normalized rule of a public suffix list
//! - `SuffixDatabase`: the immutable rule table built from a list document
//! - `find_suffix()`: the longest-match search with wildcard and exception rules

mod database;
mod matcher;
mod rule;

// Re-export public API
pub use database::SuffixDatabase;
pub use matcher::{find_suffix, SuffixLookup, SuffixMatch};
pub use rule::{RuleKind, Section, SuffixRule};
