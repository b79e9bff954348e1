//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{OutcomeType, ProcessingStats};

/// Prints the per-outcome counts to the log.
pub fn print_outcome_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        info!("No input processed");
        return;
    }

    info!("Outcome Counts ({} total):", total);
    for outcome in OutcomeType::iter() {
        let count = stats.get_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// Prints a one-line summary of the run.
pub fn print_summary(total: usize, valid: usize, elapsed_seconds: f64) {
    let rate = if elapsed_seconds > 0.0 {
        total as f64 / elapsed_seconds
    } else {
        0.0
    };
    info!(
        "Processed {} input{} ({} valid, {} invalid) in {:.2}s (~{:.0}/sec)",
        total,
        if total == 1 { "" } else { "s" },
        valid,
        total - valid,
        elapsed_seconds,
        rate
    );
}
