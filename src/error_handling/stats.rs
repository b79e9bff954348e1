//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for the outcome of every input
//! processed during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::OutcomeType;
use crate::config::MAX_DOMAIN_LENGTH;
use crate::domain::Domain;

/// Thread-safe outcome statistics tracker.
///
/// Every [`OutcomeType`] is initialized to zero on creation, so counters can be
/// incremented from multiple threads through a shared reference.
pub struct ProcessingStats {
    outcomes: HashMap<OutcomeType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in OutcomeType::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        ProcessingStats { outcomes }
    }

    /// Increment an outcome counter.
    pub fn increment(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                outcome
            );
        }
    }

    /// Classifies a decomposed domain and increments its counter.
    pub fn record(&self, domain: &Domain) -> OutcomeType {
        let outcome = classify(domain);
        self.increment(outcome);
        outcome
    }

    /// Get the count for an outcome type.
    pub fn get_count(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of recorded inputs.
    pub fn total(&self) -> usize {
        OutcomeType::iter().map(|o| self.get_count(o)).sum()
    }

    /// Number of recorded inputs that were not fully valid.
    pub fn total_invalid(&self) -> usize {
        self.total() - self.get_count(OutcomeType::Valid)
    }
}

/// Determines which outcome category a decomposed domain falls into.
///
/// Checks run from most to least specific: an encoding failure hides all
/// other properties, and a missing suffix is reported before label problems.
pub fn classify(domain: &Domain) -> OutcomeType {
    if domain.error().is_some() {
        OutcomeType::EncodingError
    } else if domain.valid() {
        OutcomeType::Valid
    } else if domain.valid_host() {
        OutcomeType::WildcardHost
    } else if domain.suffix().is_none() {
        OutcomeType::NoSuffix
    } else if domain.ascii_form().len() > MAX_DOMAIN_LENGTH {
        OutcomeType::TooLong
    } else {
        OutcomeType::InvalidLabel
    }
}
