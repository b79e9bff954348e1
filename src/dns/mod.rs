//! DNS fallback for top-level labels missing from the suffix list.
//!
//! A label with an SOA record at the root zone's next level (`<label>.`) is a
//! delegated top-level domain, so it is treated as a public suffix. Answers
//! are memoized for the life of the resolver.

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::Resolver;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::SuffixResolver;
use crate::validate::is_valid_label;

/// [`SuffixResolver`] that checks unknown top-level labels for an SOA record.
///
/// Wraps the blocking `hickory_resolver::Resolver`, which runs its own
/// runtime: do not call it from inside a Tokio runtime.
pub struct DnsSuffixResolver {
    resolver: Resolver,
    answers: Mutex<HashMap<String, bool>>,
}

impl DnsSuffixResolver {
    /// Wraps a configured resolver, see [`crate::initialization::init_resolver`].
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            answers: Mutex::new(HashMap::new()),
        }
    }

    fn lookup(&self, label: &str) -> bool {
        match self.resolver.soa_lookup(format!("{label}.")) {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(e) => {
                match e.kind() {
                    ResolveErrorKind::NoRecordsFound { .. } => {
                        debug!("No SOA record for {}", label);
                    }
                    _ => warn!("SOA lookup for {} failed: {}", label, e),
                }
                false
            }
        }
    }
}

impl SuffixResolver for DnsSuffixResolver {
    fn is_public_suffix(&self, label: &str) -> bool {
        if !is_valid_label(label, false) {
            return false;
        }
        if let Some(&known) = self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(label)
        {
            return known;
        }

        // Not held across the query; two threads may look up the same label
        let found = self.lookup(label);
        debug!("SOA fallback for {}: {}", label, found);
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(label.to_string(), found);
        found
    }
}

impl std::fmt::Debug for DnsSuffixResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let answers = self
            .answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("DnsSuffixResolver")
            .field("answers", &answers)
            .finish()
    }
}
