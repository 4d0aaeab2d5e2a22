//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS naming limits, timeouts and default values.

/// Domain appended to every row that does not carry its own `domain_name`.
///
/// Can be overridden with `--default-domain` or the `FQDN_DEFAULT_DOMAIN`
/// environment variable (also read from `.env`).
pub const DEFAULT_DOMAIN: &str = "example.com";

/// Reverse-lookup zone for IPv4 PTR names.
pub const REVERSE_ZONE_SUFFIX: &str = "in-addr.arpa";

// DNS naming limits (RFC 1035)
/// Maximum length of a single DNS label
pub const MAX_LABEL_LENGTH: usize = 63;
/// Maximum length of a full domain name (without trailing dot)
pub const MAX_FQDN_LENGTH: usize = 253;

/// Maximum rows whose lookups are in flight at the same time.
/// Matches the worker pool size the tool historically ran with.
pub const DEFAULT_MAX_CONCURRENCY: usize = 20;

/// DNS query timeout in seconds
/// Most internal resolvers answer in well under a second; 3s fails fast on dead servers
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Long interface type names mapped to their two-letter short forms.
///
/// Only consulted when interface abbreviation is enabled. New entries may be
/// needed as new interface names show up in inventory exports.
pub const INTERFACE_MAP: &[(&str, &str)] = &[
    ("cellular", "ce"),
    ("fortygigabitethernet", "fo"),
    ("fortygige", "fo"),
    ("tengigabitethernet", "te"),
    ("gigabitethernet", "gi"),
    ("fastethernet", "fa"),
    ("ethernet", "et"),
    ("ge", "gi"),
    ("loopback", "lo"),
    ("loop", "lo"),
    ("multilink", "mu"),
    ("port-channel", "po"),
    ("portchannel", "po"),
    ("ether-channel", "po"),
    ("etherchannel", "po"),
    ("serial", "se"),
    ("tunnel", "tu"),
    ("vlan", "vl"),
    ("bvi", "bv"),
];
