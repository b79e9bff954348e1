//! Longest-match search for the public suffix of a host.

use super::database::SuffixDatabase;
use super::rule::RuleKind;
use crate::config::WILDCARD_LABEL;

/// A suffix found for a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Number of rightmost labels forming the suffix
    pub labels: usize,
    /// The match exists only because private rules were allowed
    pub private: bool,
}

/// Result of looking up the suffix of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixLookup {
    /// A suffix was found
    Found(SuffixMatch),
    /// No rule ends in the rightmost label
    UnknownRoot,
    /// Too few labels to have a suffix
    NotFound,
}

/// Finds the public suffix of a host given as labels, left to right.
///
/// With `allow_private` the search runs twice, once over public rules only and
/// once including private rules; the private-aware result is used, and
/// reported as private, only when it differs from the public one.
pub fn find_suffix<S: AsRef<str>>(
    database: &SuffixDatabase,
    labels: &[S],
    allow_private: bool,
) -> SuffixLookup {
    let Some(root) = labels.last() else {
        return SuffixLookup::NotFound;
    };
    if labels.len() < 2 {
        return SuffixLookup::NotFound;
    }
    if !database.contains_root(root.as_ref()) {
        return SuffixLookup::UnknownRoot;
    }

    let public = longest_match(database, labels, false);
    if allow_private {
        let private = longest_match(database, labels, true);
        if private != public {
            return SuffixLookup::Found(SuffixMatch {
                labels: private,
                private: true,
            });
        }
    }
    SuffixLookup::Found(SuffixMatch {
        labels: public,
        private: false,
    })
}

/// Walks outward from the root label and returns the suffix length in labels.
///
/// The root itself is the starting match, since its bucket exists. Each step
/// adds one label to the candidate and checks, in order: an exception rule
/// (the suffix is then the previous candidate), an exact rule (keep going),
/// and the wildcard covering the candidate (the candidate is the suffix and
/// the walk ends). The walk also ends at the first candidate nothing matches.
fn longest_match<S: AsRef<str>>(
    database: &SuffixDatabase,
    labels: &[S],
    allow_private: bool,
) -> usize {
    let count = labels.len();
    let mut best = 1;

    for extra in 1..count {
        let candidate = join(&labels[count - 1 - extra..]);
        if database.has_rule(&candidate, RuleKind::Exception, allow_private) {
            return extra;
        }
        if database.has_rule(&candidate, RuleKind::Normal, allow_private) {
            best = extra + 1;
            continue;
        }
        let wildcard = format!("{WILDCARD_LABEL}.{}", join(&labels[count - extra..]));
        if database.has_rule(&wildcard, RuleKind::Wildcard, allow_private) {
            return extra + 1;
        }
        break;
    }

    best
}

fn join<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}
