//! Label and host name syntax checks.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, WILDCARD_LABEL};

/// Letters, digits and hyphens, 1-63 long, not starting or ending with a hyphen.
const LABEL_PATTERN: &str = r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LABEL_PATTERN, "LABEL_RE"));

/// Checks one ASCII label.
///
/// `leftmost` allows the label to be the wildcard token `*`.
pub fn is_valid_label(label: &str, leftmost: bool) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return false;
    }
    if label == WILDCARD_LABEL {
        return leftmost;
    }
    LABEL_RE.is_match(label)
}

/// Checks every label of a host, left to right.
///
/// Only the first label may be the wildcard token.
pub fn labels_valid<S: AsRef<str>>(labels: &[S]) -> bool {
    !labels.is_empty()
        && labels
            .iter()
            .enumerate()
            .all(|(index, label)| is_valid_label(label.as_ref(), index == 0))
}

/// Checks the total length of the ASCII form.
pub fn length_valid(ascii: &str) -> bool {
    ascii.len() <= MAX_DOMAIN_LENGTH
}

/// True if the leftmost label is the wildcard token.
pub fn is_wildcard_host<S: AsRef<str>>(labels: &[S]) -> bool {
    labels
        .first()
        .is_some_and(|label| label.as_ref() == WILDCARD_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        for label in ["a", "com", "goat", "xn--p1ai", "a-b", "a1", "1a", "123", "A-Z"] {
            assert!(is_valid_label(label, false), "label: {label}");
        }
    }

    #[test]
    fn test_label_length_limit() {
        let max = "a".repeat(MAX_LABEL_LENGTH);
        assert!(is_valid_label(&max, false));
        let over = "a".repeat(MAX_LABEL_LENGTH + 1);
        assert!(!is_valid_label(&over, false));
    }

    #[test]
    fn test_label_hyphen_edges() {
        assert!(!is_valid_label("-goat", false));
        assert!(!is_valid_label("goat-", false));
        assert!(!is_valid_label("-", false));
        assert!(is_valid_label("go-at", false));
    }

    #[test]
    fn test_label_invalid_characters() {
        for label in ["go_at", "go at", "goat!", "gоat", "go:at"] {
            assert!(!is_valid_label(label, false), "label: {label}");
        }
    }

    #[test]
    fn test_empty_label() {
        assert!(!is_valid_label("", false));
        assert!(!is_valid_label("", true));
    }

    #[test]
    fn test_wildcard_only_leftmost() {
        assert!(is_valid_label("*", true));
        assert!(!is_valid_label("*", false));
        assert!(!is_valid_label("a*", true));
    }

    #[test]
    fn test_labels_valid() {
        assert!(labels_valid(&["www", "example", "com"]));
        assert!(labels_valid(&["*", "example", "com"]));
        assert!(!labels_valid(&["www", "*", "com"]));
        assert!(!labels_valid(&["www", "", "com"]));
        assert!(!labels_valid::<&str>(&[]));
    }

    #[test]
    fn test_length_valid() {
        assert!(length_valid(&"a".repeat(MAX_DOMAIN_LENGTH)));
        assert!(!length_valid(&"a".repeat(MAX_DOMAIN_LENGTH + 1)));
    }

    #[test]
    fn test_is_wildcard_host() {
        assert!(is_wildcard_host(&["*", "example", "com"]));
        assert!(!is_wildcard_host(&["www", "example", "com"]));
        assert!(!is_wildcard_host::<&str>(&[]));
    }
}
