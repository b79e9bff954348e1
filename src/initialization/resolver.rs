//! DNS resolver initialization.
//!
//! This module builds the blocking resolver behind the SOA fallback with
//! short timeouts, so an unknown top-level label costs at most a few seconds.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for SOA lookups.
///
/// Uses the default upstream configuration (Google DNS) with `DNS_TIMEOUT_SECS`
/// per query and `DNS_ATTEMPTS` attempts. `ndots` is 0 so that search domains
/// are never appended to a bare top-level label.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver's runtime
/// cannot be created.
pub fn init_resolver() -> Result<Resolver, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Resolver::new(ResolverConfig::default(), opts)
        .map_err(|e| InitializationError::DnsResolverError(e.to_string()))
}
