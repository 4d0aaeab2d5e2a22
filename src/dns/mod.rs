//! DNS resolution and record comparison.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Forward lookups (FQDN to IPv4 addresses)
//! - Reverse lookups (IPv4 address to PTR targets)
//! - Comparison of the answers against the names built from inventory
//!
//! Lookups go through the [`DnsLookup`] trait so the comparator can run
//! against canned answers in tests.

mod compare;
mod resolution;

// Re-export public API
pub use compare::{check_record, compare_forward, compare_reverse, CompareOptions, LookupResult};
pub use resolution::{DnsLookup, HickoryLookup};
