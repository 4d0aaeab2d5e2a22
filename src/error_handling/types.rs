//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Reasons an input row is rejected before any DNS query is made.
///
/// A validation error only ever affects its own row; the run continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("ip_address is missing")]
    MissingIpAddress,

    #[error("ip_address '{0}' is not a valid IPv4 address")]
    InvalidIpAddress(String),

    #[error("ip_address '{0}' is IPv6; only IPv4 rows are supported")]
    NotIpv4(String),

    #[error("device_hostname is missing")]
    MissingHostname,

    #[error("device_hostname '{0}' does not normalize to a valid DNS label")]
    InvalidHostname(String),

    #[error("interface_name '{0}' does not normalize to a valid DNS label")]
    InvalidInterface(String),

    #[error("domain '{0}' is not a valid DNS domain")]
    InvalidDomain(String),

    #[error("FQDN '{0}' exceeds {max} characters", max = crate::config::MAX_FQDN_LENGTH)]
    FqdnTooLong(String),
}

impl ValidationError {
    /// Statistics bucket for this error.
    pub fn reason(&self) -> RejectReason {
        match self {
            ValidationError::InvalidEncoding(_) => RejectReason::InvalidEncoding,
            ValidationError::MissingIpAddress => RejectReason::MissingIpAddress,
            ValidationError::InvalidIpAddress(_) | ValidationError::NotIpv4(_) => {
                RejectReason::InvalidIpAddress
            }
            ValidationError::MissingHostname => RejectReason::MissingHostname,
            ValidationError::InvalidHostname(_) => RejectReason::InvalidHostname,
            ValidationError::InvalidInterface(_) => RejectReason::InvalidInterface,
            ValidationError::InvalidDomain(_) | ValidationError::FqdnTooLong(_) => {
                RejectReason::InvalidDomain
            }
        }
    }
}

/// Errors raised by the DNS layer.
///
/// Missing records are not errors (they are reported as "does not exist");
/// only failures of the resolver itself end up here, and they abort the run.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("DNS resolver unavailable while looking up {query}: {message}")]
    ResolverUnavailable { query: String, message: String },
}

/// Categories of rejected input rows, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RejectReason {
    InvalidEncoding,
    MissingIpAddress,
    InvalidIpAddress,
    MissingHostname,
    InvalidHostname,
    InvalidInterface,
    InvalidDomain,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidEncoding => "Invalid text encoding",
            RejectReason::MissingIpAddress => "Missing IP address",
            RejectReason::InvalidIpAddress => "Invalid IP address",
            RejectReason::MissingHostname => "Missing hostname",
            RejectReason::InvalidHostname => "Invalid hostname",
            RejectReason::InvalidInterface => "Invalid interface name",
            RejectReason::InvalidDomain => "Invalid domain",
        }
    }
}

/// Notable lookup outcomes tracked across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ForwardRecordFound,
    ForwardNeedsUpdate,
    ReverseRecordFound,
    ReverseNeedsUpdate,
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ForwardRecordFound => "Forward record found",
            InfoType::ForwardNeedsUpdate => "Forward record needs update",
            InfoType::ReverseRecordFound => "Reverse record found",
            InfoType::ReverseNeedsUpdate => "Reverse record needs update",
        }
    }
}
