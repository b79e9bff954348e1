//! Domain decomposition.
//!
//! This module splits a host name into subdomain, registrable label and
//! public suffix, and decides whether it is a valid host.
//!
//! Key types:
//! - `Domain` - the immutable result of decomposing one input
//! - `Decomposer` - borrows a `SuffixDatabase` and the caller's options
//! - `SuffixResolver` - optional fallback for unlisted top-level labels

mod extract;
mod resolver;

use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;
use serde::{Serialize, Serializer};

pub use extract::tokens;
pub use resolver::SuffixResolver;

use crate::error_handling::EncodingError;
use crate::normalize::{normalize, normalize_bytes, NormalizedName};
use crate::suffix::{find_suffix, SuffixDatabase, SuffixLookup};
use crate::validate::{is_wildcard_host, labels_valid, length_valid};

/// A decomposed host name.
///
/// All parts are computed when the value is built and never change. Parts are
/// in ASCII (punycode) form; [`Domain::text`] holds the Unicode form.
///
/// Two domains are equal when their suffix, registrable label and subdomain are
/// equal; `private` and the validity flags do not take part.
///
/// ```
/// use domaintools::SuffixDatabase;
///
/// let db = SuffixDatabase::parse("uk\nco.uk\n").unwrap();
/// let domain = db.decompose("www.brokerdaze.co.uk");
/// assert_eq!(domain.suffix(), Some("co.uk"));
/// assert_eq!(domain.registrable_label(), Some("brokerdaze"));
/// assert_eq!(domain.subdomain(), Some("www"));
/// assert!(domain.valid());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Domain {
    text: String,
    ascii_form: String,
    labels: Vec<String>,
    suffix: Option<String>,
    registrable_label: Option<String>,
    subdomain: Option<String>,
    private: bool,
    valid: bool,
    valid_host: bool,
    #[serde(serialize_with = "serialize_error")]
    error: Option<EncodingError>,
}

fn serialize_error<S: Serializer>(
    error: &Option<EncodingError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Domain {
    /// Unicode form of the whole host.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// ASCII (punycode) form of the whole host. Empty if normalization failed.
    pub fn ascii_form(&self) -> &str {
        &self.ascii_form
    }

    /// Lowercase ASCII labels, left to right.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The public suffix, e.g. `co.uk`.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// The label directly left of the suffix.
    pub fn registrable_label(&self) -> Option<&str> {
        self.registrable_label.as_deref()
    }

    /// Everything left of the registrable label.
    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Registrable label and suffix joined, for valid domains only.
    pub fn registrable_domain(&self) -> Option<String> {
        if !self.valid {
            return None;
        }
        match (&self.registrable_label, &self.suffix) {
            (Some(label), Some(suffix)) => Some(format!("{label}.{suffix}")),
            _ => None,
        }
    }

    /// The suffix came from a private-section rule (only with `allow_private`).
    pub fn private(&self) -> bool {
        self.private
    }

    /// A valid registrable host whose leftmost label is not `*`.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Like [`Domain::valid`], but the leftmost label may be `*`.
    pub fn valid_host(&self) -> bool {
        self.valid_host
    }

    /// The normalization error, if the input could not be normalized.
    pub fn error(&self) -> Option<&EncodingError> {
        self.error.as_ref()
    }

    fn from_error(text: String, error: EncodingError) -> Self {
        Self {
            text,
            ascii_form: String::new(),
            labels: Vec::new(),
            suffix: None,
            registrable_label: None,
            subdomain: None,
            private: false,
            valid: false,
            valid_host: false,
            error: Some(error),
        }
    }

    fn key(&self) -> (&Option<String>, &Option<String>, &Option<String>) {
        (&self.suffix, &self.registrable_label, &self.subdomain)
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ascii_form)
    }
}

/// Decomposes host names against one suffix database.
///
/// Holds only shared references, so it is cheap to create per call site and
/// can be used from many threads at once.
///
/// ```
/// use domaintools::{Decomposer, SuffixDatabase};
///
/// let db = SuffixDatabase::parse(
///     "com\n// ===BEGIN PRIVATE DOMAINS===\nuk.com\n",
/// ).unwrap();
/// let domain = Decomposer::new(&db).allow_private(true).decompose("goat.uk.com");
/// assert_eq!(domain.suffix(), Some("uk.com"));
/// assert!(domain.private());
/// ```
#[derive(Clone, Copy)]
pub struct Decomposer<'a> {
    database: &'a SuffixDatabase,
    resolver: Option<&'a dyn SuffixResolver>,
    allow_private: bool,
}

impl fmt::Debug for Decomposer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decomposer")
            .field("rules", &self.database.len())
            .field("resolver", &self.resolver.is_some())
            .field("allow_private", &self.allow_private)
            .finish()
    }
}

impl<'a> Decomposer<'a> {
    /// Creates a decomposer using public rules only and no resolver.
    pub fn new(database: &'a SuffixDatabase) -> Self {
        Self {
            database,
            resolver: None,
            allow_private: false,
        }
    }

    /// Also match rules from the private section of the list.
    pub fn allow_private(mut self, allow: bool) -> Self {
        self.allow_private = allow;
        self
    }

    /// Consults `resolver` for top-level labels missing from the list.
    pub fn with_resolver(mut self, resolver: &'a dyn SuffixResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Decomposes a host name.
    ///
    /// Never fails: a normalization error is stored in the returned domain,
    /// which is then invalid.
    pub fn decompose(&self, input: &str) -> Domain {
        match normalize(input) {
            Ok(name) => self.split(name),
            Err(e) => {
                debug!("Failed to normalize {:?}: {}", input, e);
                Domain::from_error(input.trim().to_lowercase(), e)
            }
        }
    }

    /// Decomposes a host name given as UTF-8 bytes.
    pub fn decompose_bytes(&self, input: &[u8]) -> Domain {
        match normalize_bytes(input) {
            Ok(name) => self.split(name),
            Err(e) => {
                let text = String::from_utf8_lossy(input).trim().to_lowercase();
                debug!("Failed to normalize {:?}: {}", text, e);
                Domain::from_error(text, e)
            }
        }
    }

    fn split(&self, name: NormalizedName) -> Domain {
        let NormalizedName {
            text,
            ascii,
            labels,
        } = name;
        let (suffix_len, private) = self.suffix_len(&labels);

        let count = labels.len();
        let (suffix, registrable_label, subdomain) = if suffix_len == 0 || suffix_len >= count {
            (None, None, None)
        } else {
            let registrable = count - suffix_len - 1;
            let subdomain = (registrable > 0).then(|| labels[..registrable].join("."));
            (
                Some(labels[registrable + 1..].join(".")),
                Some(labels[registrable].clone()),
                subdomain,
            )
        };

        let valid_host = suffix.is_some() && length_valid(&ascii) && labels_valid(&labels);
        let valid = valid_host && !is_wildcard_host(&labels);
        let private = private && suffix.is_some();

        debug!(
            "Decomposed {}: subdomain={:?} label={:?} suffix={:?} private={} valid={}",
            ascii, subdomain, registrable_label, suffix, private, valid
        );

        Domain {
            text,
            ascii_form: ascii,
            labels,
            suffix,
            registrable_label,
            subdomain,
            private,
            valid,
            valid_host,
            error: None,
        }
    }

    /// Number of suffix labels and whether the match is private.
    fn suffix_len(&self, labels: &[String]) -> (usize, bool) {
        match find_suffix(self.database, labels, self.allow_private) {
            SuffixLookup::Found(found) => (found.labels, found.private),
            SuffixLookup::UnknownRoot => {
                let root = labels.last().map(String::as_str).unwrap_or_default();
                match self.resolver {
                    Some(resolver) if resolver.is_public_suffix(root) => {
                        debug!("Resolver accepted unlisted suffix {}", root);
                        (1, false)
                    }
                    _ => (0, false),
                }
            }
            SuffixLookup::NotFound => (0, false),
        }
    }
}

impl SuffixDatabase {
    /// Decomposes `input` with public rules only.
    pub fn decompose(&self, input: &str) -> Domain {
        Decomposer::new(self).decompose(input)
    }

    /// Decomposes `input`, optionally matching private rules.
    pub fn decompose_with(&self, input: &str, allow_private: bool) -> Domain {
        Decomposer::new(self)
            .allow_private(allow_private)
            .decompose(input)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
