//! Token normalization for DNS names.
//!
//! Inventory exports carry hostnames and interface names in whatever form the
//! device reports them (`SW01.corp.local`, `GigabitEthernet0/1`, `Po_10`).
//! The functions here turn them into DNS labels using a fixed, total rule set:
//!
//! - trim, lowercase
//! - `_`, `/`, `\`, `:` and whitespace become `-` (`.` too, for interfaces)
//! - anything else outside `[a-z0-9-]` is dropped
//! - runs of `-` collapse, leading and trailing `-` are removed
//! - the result must be 1..=63 characters
//!
//! Hostnames keep only the part before the first `.`, so an already-qualified
//! name loses its old domain.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{INTERFACE_MAP, MAX_LABEL_LENGTH};
use crate::error_handling::ValidationError;

/// Leading interface type: letters, or letters-dash-letters (`port-channel`).
static INTERFACE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+-[a-z]+|^[a-z]+").expect("interface type pattern is valid")
});

/// Options controlling how tokens are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Replace long interface types with their short form (`gigabitethernet` -> `gi`)
    pub abbreviate_interfaces: bool,
}

fn clean_label(raw: &str, dot_is_separator: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars().flat_map(char::to_lowercase) {
        let c = match c {
            '_' | '/' | '\\' | ':' => '-',
            '.' if dot_is_separator => '-',
            c if c.is_whitespace() => '-',
            c => c,
        };
        if c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        }
    }
    out.trim_end_matches('-').to_string()
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && label.len() <= MAX_LABEL_LENGTH
}

/// Normalizes a device hostname into a single DNS label.
///
/// # Errors
///
/// `ValidationError::InvalidHostname` when nothing usable is left, or the
/// label is longer than 63 characters.
pub fn normalize_hostname(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let host = trimmed.split('.').next().unwrap_or_default();
    let label = clean_label(host, false);
    if is_valid_label(&label) {
        Ok(label)
    } else {
        Err(ValidationError::InvalidHostname(trimmed.to_string()))
    }
}

/// Normalizes an interface name into a single DNS label.
///
/// `Gi0/1.100` becomes `gi0-1-100`. With `abbreviate_interfaces` the leading
/// type is shortened through [`INTERFACE_MAP`], so `GigabitEthernet0/1`
/// becomes `gi0-1`. Unknown types are left as they are.
///
/// # Errors
///
/// `ValidationError::InvalidInterface` when nothing usable is left, or the
/// label is longer than 63 characters.
pub fn normalize_interface(
    raw: &str,
    options: &NormalizeOptions,
) -> Result<String, ValidationError> {
    let mut label = clean_label(raw, true);
    if options.abbreviate_interfaces {
        label = abbreviate_interface(&label);
    }
    if is_valid_label(&label) {
        Ok(label)
    } else {
        Err(ValidationError::InvalidInterface(raw.trim().to_string()))
    }
}

/// Shortens the type prefix of an already-cleaned interface label.
pub fn abbreviate_interface(label: &str) -> String {
    let Some(found) = INTERFACE_TYPE.find(label) else {
        return label.to_string();
    };
    let kind = found.as_str();
    let Some((_, short)) = INTERFACE_MAP.iter().find(|(long, _)| *long == kind) else {
        return label.to_string();
    };
    let number = label[found.end()..].trim_start_matches('-');
    format!("{short}{number}")
}

/// Normalizes the domain part of an FQDN.
///
/// A missing or blank `domain` falls back to `default_domain`. The result is
/// lowercase with no trailing dot, and every label is checked for DNS
/// legality (no character stripping happens here; a bad domain is rejected).
///
/// # Errors
///
/// `ValidationError::InvalidDomain` for empty labels, over-long labels,
/// characters outside `[a-z0-9-]`, or labels starting/ending with `-`.
pub fn normalize_domain(
    domain: Option<&str>,
    default_domain: &str,
) -> Result<String, ValidationError> {
    let chosen = domain
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| default_domain.trim());
    let lowered = chosen.to_ascii_lowercase();
    let normalized = lowered.strip_suffix('.').unwrap_or(&lowered);

    let valid = !normalized.is_empty()
        && normalized.split('.').all(|label| {
            is_valid_label(label)
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        });

    if valid {
        Ok(normalized.to_string())
    } else {
        Err(ValidationError::InvalidDomain(chosen.to_string()))
    }
}
