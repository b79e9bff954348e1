//! Configuration constants.
//!
//! This module defines the constants used throughout the crate: host name
//! limits, suffix list markers, and the defaults for loading the list.

use std::time::Duration;

// Host name limits
/// Maximum length of a single label in characters.
pub const MAX_LABEL_LENGTH: usize = 63;
/// Maximum length of the ASCII form of a whole host name.
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// The wildcard token, allowed only as the leftmost label of a host.
pub const WILDCARD_LABEL: &str = "*";
/// Prefix of punycode-encoded labels.
pub const ACE_PREFIX: &str = "xn--";

// Suffix list document format
/// Comment line that starts the private section of the list.
/// Every rule after this line is tagged private.
pub const PRIVATE_SECTION_MARKER: &str = "// ===BEGIN PRIVATE DOMAINS===";
/// Prefix of comment lines.
pub const COMMENT_PREFIX: &str = "//";
/// Prefix of exception rules.
pub const EXCEPTION_PREFIX: char = '!';

// List loading
/// Default source of the suffix list.
pub const DEFAULT_PSL_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";
/// Default directory for the downloaded list.
pub const DEFAULT_CACHE_DIR: &str = ".psl_cache";
/// A cached list younger than this is used without refetching.
/// The list changes a few times a month, so a week keeps it reasonably current.
pub const CACHE_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);
/// Timeout for downloading the list.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);
/// Largest list body accepted from the network (the real list is ~250KB).
pub const MAX_LIST_SIZE: usize = 16 * 1024 * 1024;

// DNS fallback
/// DNS query timeout in seconds for the SOA fallback.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Attempts per SOA query before giving up.
pub const DNS_ATTEMPTS: usize = 2;
