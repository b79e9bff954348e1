//! The compiled suffix rule database.

use std::collections::HashMap;

use log::{debug, info, warn};

use super::rule::{RuleKind, Section, SuffixRule};
use crate::config::{COMMENT_PREFIX, PRIVATE_SECTION_MARKER};
use crate::error_handling::DatabaseError;

/// Kinds stored for one label sequence, one slot per section.
///
/// Keeping the sections apart means the same sequence listed in both parts of
/// the list is two rules, never one merged rule.
#[derive(Debug, Default, Clone, Copy)]
struct SectionKinds {
    public: Option<RuleKind>,
    private: Option<RuleKind>,
}

impl SectionKinds {
    fn slot(&mut self, section: Section) -> &mut Option<RuleKind> {
        match section {
            Section::Public => &mut self.public,
            Section::Private => &mut self.private,
        }
    }

    fn matches(&self, kind: RuleKind, allow_private: bool) -> bool {
        self.public == Some(kind) || (allow_private && self.private == Some(kind))
    }
}

/// Immutable collection of suffix rules, indexed by rightmost label.
///
/// Built once from a suffix list document and then only read, so it can be
/// shared freely between threads (`&SuffixDatabase` or `Arc<SuffixDatabase>`).
/// Public and private rules live in the same buckets; private lookups are a
/// filter over the same structure.
#[derive(Debug, Default, Clone)]
pub struct SuffixDatabase {
    /// rightmost label -> joined rule -> kinds per section
    buckets: HashMap<String, HashMap<String, SectionKinds>>,
    rule_count: usize,
}

impl SuffixDatabase {
    /// Builds the database from the text of a public suffix list.
    ///
    /// Blank lines and `//` comments are skipped. The
    /// `// ===BEGIN PRIVATE DOMAINS===` comment switches every following rule
    /// to the private section. Rules that cannot be normalized are skipped with
    /// a warning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the document contains no usable
    /// rule at all.
    pub fn parse(document: &str) -> Result<Self, DatabaseError> {
        let mut section = Section::Public;
        let mut rules = Vec::new();

        for (index, line) in document.lines().enumerate() {
            let line = line.trim();
            if line.starts_with(PRIVATE_SECTION_MARKER) {
                section = Section::Private;
                continue;
            }
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            match SuffixRule::parse(line, section) {
                Ok(rule) if rule.has_empty_label() => {
                    warn!("Skipping suffix rule with an empty label on line {}: {}", index + 1, line);
                }
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    warn!("Skipping suffix rule on line {}: {}", index + 1, e);
                }
            }
        }

        let database = Self::from_rules(rules);
        if database.is_empty() {
            return Err(DatabaseError::Unavailable(
                "document contains no suffix rules".to_string(),
            ));
        }

        info!(
            "Loaded {} suffix rules under {} top-level labels ({} private)",
            database.len(),
            database.buckets.len(),
            database.private_len()
        );
        Ok(database)
    }

    /// Builds the database from already parsed rules.
    ///
    /// A rule repeated within one section replaces the earlier entry.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = SuffixRule>,
    {
        let mut database = Self::default();
        for rule in rules {
            database.insert(rule);
        }
        database
    }

    fn insert(&mut self, rule: SuffixRule) {
        let joined = rule.joined();
        let slot = self
            .buckets
            .entry(rule.root().to_string())
            .or_default()
            .entry(joined)
            .or_default()
            .slot(rule.section());
        if slot.is_none() {
            self.rule_count += 1;
        } else {
            debug!("Duplicate suffix rule {} replaces earlier entry", rule.joined());
        }
        *slot = Some(rule.kind());
    }

    /// Number of distinct (rule, section) pairs.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    /// True if no rule is stored.
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    /// Number of rules in the private section.
    pub fn private_len(&self) -> usize {
        self.buckets
            .values()
            .flat_map(HashMap::values)
            .filter(|kinds| kinds.private.is_some())
            .count()
    }

    /// True if any rule ends in `label`.
    pub fn contains_root(&self, label: &str) -> bool {
        self.buckets.contains_key(label)
    }

    /// True if `joined` is stored as a rule of `kind` in an applicable section.
    ///
    /// Public rules always apply; private rules only with `allow_private`.
    pub fn has_rule(&self, joined: &str, kind: RuleKind, allow_private: bool) -> bool {
        let root = joined.rsplit('.').next().unwrap_or(joined);
        self.buckets
            .get(root)
            .and_then(|bucket| bucket.get(joined))
            .is_some_and(|kinds| kinds.matches(kind, allow_private))
    }
}
