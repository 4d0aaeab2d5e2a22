//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for forward and reverse lookups.
///
/// Reads the operating system resolver configuration (`/etc/resolv.conf` on
/// Unix) so lookups see the same internal zones as the rest of the network.
/// If the system configuration cannot be read, falls back to the library's
/// default upstream servers and logs a warning.
///
/// Options are tuned for record auditing rather than general use:
/// - one attempt per query
/// - IPv4 answers only
/// - no answer cache, so a rerun always sees current DNS state
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout_secs` is zero.
pub fn init_resolver(timeout_secs: u64) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if timeout_secs == 0 {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be at least one second".to_string(),
        ));
    }

    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Could not read system DNS configuration ({e}); using default upstreams");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = 1;
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;
    opts.cache_size = 0;
    // Names are always passed fully qualified; never append search domains
    opts.ndots = 0;

    log::debug!(
        "DNS resolver using {} nameserver(s), timeout {}s",
        config.name_servers().len(),
        timeout_secs
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
