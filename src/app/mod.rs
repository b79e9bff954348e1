//! Main application modules.
//!
//! This module provides input reading, batch processing, result printing and
//! statistics used by the command-line tool.

pub mod input;
pub mod output;
pub mod process;
pub mod statistics;

// Re-export public API
pub use input::{domain_lines, read_input};
pub use output::write_domain;
pub use process::{process_text, ProcessOptions};
pub use statistics::{print_outcome_statistics, print_summary};
