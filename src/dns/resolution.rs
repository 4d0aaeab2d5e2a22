//! Forward and reverse DNS resolution.
//!
//! This module defines the `DnsLookup` seam used by the comparator and its
//! production implementation over `hickory-resolver`.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Forward and reverse lookups against some DNS source.
///
/// An empty result means "no such record" and is not an error. Only a failure
/// of the resolver itself is returned as [`LookupError`].
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// IPv4 addresses `fqdn` currently resolves to.
    async fn forward(&self, fqdn: &str) -> Result<Vec<Ipv4Addr>, LookupError>;

    /// Host names the PTR record of `ip` points at.
    async fn reverse(&self, ip: Ipv4Addr) -> Result<Vec<String>, LookupError>;
}

/// [`DnsLookup`] backed by the system resolver.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        HickoryLookup { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn forward(&self, fqdn: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        // Trailing dot keeps the resolver from trying search domains
        let name = if fqdn.ends_with('.') {
            fqdn.to_string()
        } else {
            format!("{fqdn}.")
        };
        match self.resolver.lookup_ip(name.as_str()).await {
            Ok(response) => Ok(response
                .iter()
                .filter_map(|ip| match ip {
                    IpAddr::V4(v4) => Some(v4),
                    IpAddr::V6(_) => None,
                })
                .collect()),
            Err(e) => classify_failure(fqdn, e).map(|()| Vec::new()),
        }
    }

    async fn reverse(&self, ip: Ipv4Addr) -> Result<Vec<String>, LookupError> {
        match self.resolver.reverse_lookup(IpAddr::V4(ip)).await {
            Ok(response) => Ok(response.iter().map(|name| name.to_utf8()).collect()),
            Err(e) => classify_failure(&ip.to_string(), e).map(|()| Vec::new()),
        }
    }
}

/// Splits resolver errors into "record does not exist" (`Ok`) and
/// infrastructure failures (`Err`).
///
/// NXDOMAIN, empty answers and timeouts all mean the record is absent.
/// Missing connections and socket I/O errors mean no nameserver could be
/// asked at all, so nothing can be concluded about the record.
pub(crate) fn classify_failure(query: &str, error: ResolveError) -> Result<(), LookupError> {
    let unavailable = |error: &ResolveError| LookupError::ResolverUnavailable {
        query: query.to_string(),
        message: error.to_string(),
    };

    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            log::debug!("No record for {query} ({response_code})");
            Ok(())
        }
        ResolveErrorKind::Timeout => {
            log::warn!("DNS lookup for {query} timed out; treating as no record");
            Ok(())
        }
        ResolveErrorKind::NoConnections | ResolveErrorKind::Io(_) => Err(unavailable(&error)),
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => {
                log::warn!("DNS lookup for {query} timed out; treating as no record");
                Ok(())
            }
            ProtoErrorKind::Io(_) => Err(unavailable(&error)),
            _ => {
                log::warn!("DNS lookup for {query} failed: {error}; treating as no record");
                Ok(())
            }
        },
        _ => {
            log::warn!("DNS lookup for {query} failed: {error}; treating as no record");
            Ok(())
        }
    }
}
