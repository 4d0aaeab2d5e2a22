//! FQDN and PTR construction.

use std::net::{IpAddr, Ipv4Addr};

use crate::config::{MAX_FQDN_LENGTH, REVERSE_ZONE_SUFFIX};
use crate::error_handling::ValidationError;

use super::input::RawRecord;
use super::normalize::{normalize_domain, normalize_hostname, normalize_interface, NormalizeOptions};

/// A validated row with its computed DNS names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRecord {
    /// Input row number, carried for logging
    pub row: usize,
    pub fqdn: String,
    pub ptr: String,
    pub ip: Ipv4Addr,
    /// Normalized interface label, `None` for device-level rows
    pub interface: Option<String>,
}

/// Parses the `ip_address` cell.
pub fn parse_ipv4(raw: Option<&str>) -> Result<Ipv4Addr, ValidationError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(ValidationError::MissingIpAddress);
    }
    match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => Ok(ip),
        Ok(IpAddr::V6(_)) => Err(ValidationError::NotIpv4(value.to_string())),
        Err(_) => Err(ValidationError::InvalidIpAddress(value.to_string())),
    }
}

/// Builds the reverse-lookup name for an address.
///
/// `192.168.1.10` becomes `10.1.168.192.in-addr.arpa`.
pub fn build_ptr(ip: Ipv4Addr) -> String {
    let [a, b, c, d] = ip.octets();
    format!("{d}.{c}.{b}.{a}.{REVERSE_ZONE_SUFFIX}")
}

/// Builds `[interface.]hostname.domain` from raw tokens.
///
/// `domain` must already be normalized (see [`normalize_domain`]).
pub fn build_fqdn(
    hostname: &str,
    interface: Option<&str>,
    domain: &str,
    options: &NormalizeOptions,
) -> Result<String, ValidationError> {
    let host = normalize_hostname(hostname)?;
    let interface = interface
        .map(|i| normalize_interface(i, options))
        .transpose()?;
    join_fqdn(interface.as_deref(), &host, domain)
}

fn join_fqdn(interface: Option<&str>, host: &str, domain: &str) -> Result<String, ValidationError> {
    let fqdn = match interface {
        Some(interface) => format!("{interface}.{host}.{domain}"),
        None => format!("{host}.{domain}"),
    };
    if fqdn.len() > MAX_FQDN_LENGTH {
        return Err(ValidationError::FqdnTooLong(fqdn));
    }
    Ok(fqdn)
}

/// Validates one input row and computes its FQDN and PTR names.
///
/// The default domain is applied when the row has no `domain_name`.
///
/// # Errors
///
/// Any [`ValidationError`]. A row with an undecodable cell is rejected first,
/// then the address is checked before the hostname.
pub fn build_record(
    raw: &RawRecord,
    default_domain: &str,
    options: &NormalizeOptions,
) -> Result<BuiltRecord, ValidationError> {
    if let Some(column) = raw.invalid_utf8_column {
        return Err(ValidationError::InvalidEncoding(column.to_string()));
    }
    let ip = parse_ipv4(raw.ip_address.as_deref())?;
    let hostname = raw
        .device_hostname
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .ok_or(ValidationError::MissingHostname)?;
    let host = normalize_hostname(hostname)?;
    let interface = raw
        .interface_name
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .map(|i| normalize_interface(i, options))
        .transpose()?;
    let domain = normalize_domain(raw.domain_name.as_deref(), default_domain)?;

    let fqdn = join_fqdn(interface.as_deref(), &host, &domain)?;

    Ok(BuiltRecord {
        row: raw.row,
        fqdn,
        ptr: build_ptr(ip),
        ip,
        interface,
    })
}
