// Shared test helpers: a canned DNS source and input file setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use fqdn_builder::dns::DnsLookup;
use fqdn_builder::error_handling::LookupError;

/// DNS source answering from fixed tables.
#[derive(Default)]
pub struct CannedDns {
    pub forward: HashMap<String, Vec<Ipv4Addr>>,
    pub reverse: HashMap<Ipv4Addr, Vec<String>>,
    /// Forward queries for this name fail as if no nameserver answered
    pub unreachable_name: Option<String>,
    pub queries: AtomicUsize,
}

#[allow(dead_code)] // Not every test file uses every builder
impl CannedDns {
    pub fn with_a(mut self, name: &str, ip: &str) -> Self {
        self.forward
            .entry(name.to_string())
            .or_default()
            .push(ip.parse().expect("valid test address"));
        self
    }

    pub fn with_ptr(mut self, ip: &str, name: &str) -> Self {
        self.reverse
            .entry(ip.parse().expect("valid test address"))
            .or_default()
            .push(name.to_string());
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for CannedDns {
    async fn forward(&self, fqdn: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.unreachable_name.as_deref() == Some(fqdn) {
            return Err(LookupError::ResolverUnavailable {
                query: fqdn.to_string(),
                message: "no connections available".to_string(),
            });
        }
        // Yield so concurrent lookups genuinely interleave
        tokio::task::yield_now().await;
        Ok(self.forward.get(fqdn).cloned().unwrap_or_default())
    }

    async fn reverse(&self, ip: Ipv4Addr) -> Result<Vec<String>, LookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.reverse.get(&ip).cloned().unwrap_or_default())
    }
}

/// Writes `contents` to `devices.csv` in a fresh temp dir.
pub fn write_input(contents: &str) -> (TempDir, PathBuf) {
    write_input_bytes(contents.as_bytes())
}

/// Like [`write_input`], for inputs that are not valid UTF-8.
pub fn write_input_bytes(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("devices.csv");
    std::fs::write(&path, contents).expect("Failed to write input file");
    (dir, path)
}

/// Reads a CSV file into rows of cells (header included).
#[allow(dead_code)]
pub fn read_csv(path: &PathBuf) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open CSV");
    reader
        .records()
        .map(|r| {
            r.expect("Failed to read CSV row")
                .iter()
                .map(String::from)
                .collect()
        })
        .collect()
}
