//! Fallback for top-level labels the suffix list does not know.

/// Decides whether a label missing from the suffix list is still a public suffix.
///
/// The decomposer asks only when the rightmost label of a host has no rule at
/// all; the answer makes that single label the suffix. Implementations own
/// their timeouts, retries and caching.
pub trait SuffixResolver: Send + Sync {
    /// Returns true if `label` (ASCII, lowercase) is a public suffix.
    fn is_public_suffix(&self, label: &str) -> bool;
}

impl<F> SuffixResolver for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_public_suffix(&self, label: &str) -> bool {
        self(label)
    }
}
