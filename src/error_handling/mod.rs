//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for normalization, database loading and startup
//! - Outcome categories and thread-safe counters for batch runs

mod stats;
mod types;

// Re-export public API
pub use stats::{classify, ProcessingStats};
pub use types::{DatabaseError, EncodingError, InitializationError, OutcomeType};
