//! Comparison of built names against live DNS.
//!
//! The comparison functions are pure; `check_record` runs the two lookups for
//! a row and feeds their answers through them.

use std::net::Ipv4Addr;

use log::debug;

use crate::error_handling::LookupError;
use crate::records::{BuiltRecord, OutputRecord};

use super::resolution::DnsLookup;

/// Options controlling how existing records are judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// For device-level rows, accept an existing PTR that already names one
    /// of the device's interfaces (`<interface>.<fqdn>`).
    pub prefer_interface_ptr: bool,
}

/// State of one DNS record relative to the value it should have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub exists: bool,
    pub existing_value: Option<String>,
    pub needs_update: bool,
}

impl LookupResult {
    /// The record does not exist. Absence is never flagged for update.
    pub fn missing() -> Self {
        LookupResult {
            exists: false,
            existing_value: None,
            needs_update: false,
        }
    }

    fn found(value: String, needs_update: bool) -> Self {
        LookupResult {
            exists: true,
            existing_value: Some(value),
            needs_update,
        }
    }
}

fn canonical_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Compares the A records found for an FQDN with the expected address.
///
/// If any answer matches, the record is up to date. Otherwise the smallest
/// address is reported, so round-robin ordering cannot change the output.
pub fn compare_forward(expected: Ipv4Addr, found: &[Ipv4Addr]) -> LookupResult {
    if found.contains(&expected) {
        return LookupResult::found(expected.to_string(), false);
    }
    match found.iter().min() {
        Some(other) => LookupResult::found(other.to_string(), true),
        None => LookupResult::missing(),
    }
}

/// Compares the PTR targets found for an address with the expected FQDN.
///
/// Names compare case-insensitively and ignore a trailing dot. Reported
/// values drop the trailing dot.
pub fn compare_reverse(
    fqdn: &str,
    found: &[String],
    device_row: bool,
    options: &CompareOptions,
) -> LookupResult {
    let expected = canonical_name(fqdn);
    let names: Vec<&str> = found.iter().map(|n| n.trim_end_matches('.')).collect();

    if let Some(hit) = names.iter().find(|n| canonical_name(n) == expected) {
        return LookupResult::found(hit.to_string(), false);
    }

    if options.prefer_interface_ptr && device_row {
        let suffix = format!(".{expected}");
        if let Some(hit) = names.iter().find(|n| canonical_name(n).ends_with(&suffix)) {
            return LookupResult::found(hit.to_string(), false);
        }
    }

    match names.iter().min_by_key(|n| canonical_name(n)) {
        Some(other) => LookupResult::found(other.to_string(), true),
        None => LookupResult::missing(),
    }
}

/// Runs the forward and reverse lookup for one record and builds its result row.
///
/// # Errors
///
/// Returns [`LookupError`] only when the resolver itself is unavailable.
pub async fn check_record<L>(
    lookup: &L,
    record: &BuiltRecord,
    options: &CompareOptions,
) -> Result<OutputRecord, LookupError>
where
    L: DnsLookup + ?Sized,
{
    let (forward, reverse) =
        tokio::join!(lookup.forward(&record.fqdn), lookup.reverse(record.ip));

    let forward = compare_forward(record.ip, &forward?);
    let reverse = compare_reverse(&record.fqdn, &reverse?, record.interface.is_none(), options);

    debug!(
        "Row {}: {} -> FLU exists={} update={}, {} -> RLU exists={} update={}",
        record.row,
        record.fqdn,
        forward.exists,
        forward.needs_update,
        record.ip,
        reverse.exists,
        reverse.needs_update
    );

    Ok(OutputRecord {
        fqdn: record.fqdn.clone(),
        ptr: record.ptr.clone(),
        ip_address: record.ip.to_string(),
        flu_exists: forward.exists,
        flu_existing_value: forward.existing_value,
        flu_needs_update: forward.needs_update,
        rlu_exists: reverse.exists,
        rlu_existing_value: reverse.existing_value,
        rlu_needs_update: reverse.needs_update,
    })
}
