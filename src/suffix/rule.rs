//! Suffix list rules.

use crate::config::{EXCEPTION_PREFIX, WILDCARD_LABEL};
use crate::error_handling::EncodingError;
use crate::normalize::encode_label;

/// How a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Matches exactly its own labels
    Normal,
    /// Contains a `*` label that matches any single label
    Wildcard,
    /// Written with a leading `!`; carves a name out of a wildcard rule
    Exception,
}

/// Which part of the list a rule comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Registry-operated (ICANN) suffixes
    Public,
    /// Suffixes submitted by domain owners for their own subdomains
    Private,
}

/// One rule of the suffix list, in normalized ASCII form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// Labels from the root outward, e.g. `["uk", "co"]` for `co.uk`
    labels: Vec<String>,
    kind: RuleKind,
    section: Section,
}

impl SuffixRule {
    /// Parses one rule as written in the list.
    ///
    /// The rule is lowercased and each label punycode-encoded. Only the first
    /// whitespace-separated token is read; the list format reserves the rest of
    /// the line.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::Punycode` if a label cannot be encoded.
    pub fn parse(rule: &str, section: Section) -> Result<Self, EncodingError> {
        let token = rule.split_whitespace().next().unwrap_or_default().to_lowercase();
        let (body, exception) = match token.strip_prefix(EXCEPTION_PREFIX) {
            Some(body) => (body, true),
            None => (token.as_str(), false),
        };

        let mut labels = body
            .split('.')
            .map(encode_label)
            .collect::<Result<Vec<_>, _>>()?;
        labels.reverse();

        let kind = if exception {
            RuleKind::Exception
        } else if labels.iter().any(|l| l == WILDCARD_LABEL) {
            RuleKind::Wildcard
        } else {
            RuleKind::Normal
        };

        Ok(Self {
            labels,
            kind,
            section,
        })
    }

    /// The rule written left to right, without the `!` of exceptions.
    pub fn joined(&self) -> String {
        let mut labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        labels.reverse();
        labels.join(".")
    }

    /// The rightmost label.
    pub fn root(&self) -> &str {
        self.labels.first().map(String::as_str).unwrap_or_default()
    }

    /// Labels from the root outward.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// How the rule matches.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Which part of the list the rule came from.
    pub fn section(&self) -> Section {
        self.section
    }

    /// True if any label is empty, as in `.com` or `a..b`.
    pub(crate) fn has_empty_label(&self) -> bool {
        self.labels.iter().any(String::is_empty)
    }
}
