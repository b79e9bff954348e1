//! Batch processing of the input text.

use anyhow::Result;
use std::io::Write;

use super::input::domain_lines;
use super::output::write_domain;
use crate::config::{Mode, OutputFormat};
use crate::domain::Decomposer;
use crate::error_handling::{OutcomeType, ProcessingStats};

/// What to print for each input.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    /// One domain per line, or free text
    pub mode: Mode,
    /// In decompose mode, skip inputs that are not valid
    pub only_valid: bool,
    /// Output line format
    pub output: OutputFormat,
}

/// Decomposes every input in `text` and writes the results to `out`.
///
/// In decompose mode each non-comment line is one input. In extract mode
/// every whitespace-separated token (or URL host) is an input and only valid
/// domains are written. Every input is counted in `stats`; returns the number
/// of results written.
pub fn process_text<W: Write>(
    decomposer: &Decomposer<'_>,
    options: ProcessOptions,
    text: &str,
    out: &mut W,
    stats: &ProcessingStats,
) -> Result<usize> {
    let mut written = 0;
    match options.mode {
        Mode::Decompose => {
            for line in domain_lines(text) {
                let domain = decomposer.decompose(line);
                let outcome = stats.record(&domain);
                if options.only_valid && outcome != OutcomeType::Valid {
                    continue;
                }
                write_domain(out, line, &domain, options.output)?;
                written += 1;
            }
        }
        Mode::Extract => {
            for (token, domain) in decomposer.scan(text) {
                if stats.record(&domain) == OutcomeType::Valid {
                    write_domain(out, &token, &domain, options.output)?;
                    written += 1;
                }
            }
        }
    }
    Ok(written)
}
