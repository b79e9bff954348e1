//! Error type definitions.
//!
//! This module defines the error types of the library and the outcome
//! categories counted while processing a batch of domains.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error normalizing an input string to its punycode form.
///
/// Carried inside the resulting [`crate::Domain`] instead of being returned,
/// so a bad entry in a batch only marks that entry invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The input bytes are not UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// A label cannot be encoded to, or decoded from, punycode.
    #[error("label {label:?} cannot be represented in punycode")]
    Punycode {
        /// The offending label, lowercased.
        label: String,
    },
}

/// Error building the suffix rule database.
///
/// Raised once at startup; there is no per-domain database error.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The suffix list is empty, oversized, or not valid text.
    #[error("Suffix list unavailable: {0}")]
    Unavailable(String),

    /// The suffix list could not be read from disk.
    #[error("Suffix list read error: {0}")]
    Io(#[from] std::io::Error),

    /// The suffix list could not be downloaded.
    #[error("Suffix list download error: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Outcome of decomposing one input, as counted in run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// Fully valid registrable host
    Valid,
    /// Valid except for a leading `*` label
    WildcardHost,
    /// No public suffix (or no label left of it)
    NoSuffix,
    /// A label failed the syntax rules
    InvalidLabel,
    /// Longer than 253 characters
    TooLong,
    /// Could not be normalized to punycode
    EncodingError,
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutcomeType {
    /// Human-readable label used in the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Valid => "Valid domain",
            OutcomeType::WildcardHost => "Wildcard host",
            OutcomeType::NoSuffix => "No public suffix",
            OutcomeType::InvalidLabel => "Invalid label",
            OutcomeType::TooLong => "Domain too long",
            OutcomeType::EncodingError => "Encoding error",
        }
    }
}
