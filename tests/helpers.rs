// Shared test helpers for loading the fixture suffix list.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;

use domaintools::SuffixDatabase;

/// Path of the fixture list shipped with the tests.
#[allow(dead_code)] // Used by other test files
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("public_suffix_list.dat")
}

/// Parses the fixture list.
#[allow(dead_code)] // Used by other test files
pub fn fixture_database() -> SuffixDatabase {
    let document = std::fs::read_to_string(fixture_path()).expect("Failed to read fixture list");
    SuffixDatabase::parse(&document).expect("Failed to parse fixture list")
}
