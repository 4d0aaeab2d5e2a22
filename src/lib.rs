//! fqdn_builder library: standardized DNS names for network inventory.
//!
//! Reads device rows (IP address, hostname, optional interface and domain),
//! builds the FQDN and PTR name each row should have, and checks both against
//! live forward and reverse DNS to flag records that are missing or stale.
//!
//! # Example
//!
//! ```no_run
//! use fqdn_builder::{run_build, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("devices.csv"),
//!     output: Some(PathBuf::from("fqdns.csv")),
//!     default_domain: "corp.example.net".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_build(config).await?;
//! println!("{} records, {} rejected", report.written, report.rejected);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod records;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_build, run_build_with, BuildReport};

// Internal run module (contains the main build-and-check logic)
mod run {
    use anyhow::{bail, Context, Result};
    use futures::{stream, StreamExt, TryStreamExt};
    use log::{info, warn};
    use std::path::PathBuf;

    use crate::app::print_processing_statistics;
    use crate::config::Config;
    use crate::dns::{check_record, DnsLookup, HickoryLookup};
    use crate::error_handling::{InfoType, ProcessingStats};
    use crate::export::{export_output_csv, export_rejects_csv};
    use crate::initialization::init_resolver;
    use crate::records::{
        build_record, normalize_domain, read_input, BuiltRecord, OutputRecord, RejectedRecord,
    };

    /// Results of a build run.
    #[derive(Debug, Clone)]
    pub struct BuildReport {
        /// Data rows read from the input
        pub total_rows: usize,
        /// Result rows written
        pub written: usize,
        /// Rows rejected by validation
        pub rejected: usize,
        /// Rows whose forward record exists but points elsewhere
        pub forward_updates: usize,
        /// Rows whose PTR record exists but names something else
        pub reverse_updates: usize,
        /// Result file, `None` when written to stdout
        pub output_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a build against the system DNS resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver cannot be initialized, plus every
    /// error [`run_build_with`] can return.
    pub async fn run_build(config: Config) -> Result<BuildReport> {
        let resolver =
            init_resolver(config.dns_timeout_seconds).context("Failed to initialize DNS resolver")?;
        let lookup = HickoryLookup::new(resolver);
        run_build_with(&config, &lookup).await
    }

    /// Runs a build against the given DNS source.
    ///
    /// Invalid rows are logged, counted and (if configured) written to the
    /// rejects file; they never stop the run. Output rows keep input order
    /// regardless of `max_concurrency`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The rejects path is `-`
    /// - The default domain is not a valid domain
    /// - The input cannot be read or lacks a required column
    /// - The DNS resolver is unavailable (no output is written in that case)
    /// - The output or rejects file cannot be written
    pub async fn run_build_with<L>(config: &Config, lookup: &L) -> Result<BuildReport>
    where
        L: DnsLookup + ?Sized,
    {
        let start_time = std::time::Instant::now();

        if config.rejects.as_deref().is_some_and(|p| p.as_os_str() == "-") {
            bail!("Rejects must be written to a file, not stdout");
        }

        let default_domain = normalize_domain(None, &config.default_domain)
            .context("Invalid default domain")?;
        let raw_records = read_input(&config.file)?;
        info!(
            "Read {} row(s); default domain {}",
            raw_records.len(),
            default_domain
        );

        let stats = ProcessingStats::new();
        let normalize = config.normalize_options();

        let mut built: Vec<BuiltRecord> = Vec::with_capacity(raw_records.len());
        let mut rejected: Vec<RejectedRecord> = Vec::new();
        for raw in &raw_records {
            match build_record(raw, &default_domain, &normalize) {
                Ok(record) => built.push(record),
                Err(e) => {
                    warn!("Row {}: {e}; skipping", raw.row);
                    stats.increment_reject(e.reason());
                    rejected.push(RejectedRecord::new(raw, &e));
                }
            }
        }

        let compare = &config.compare_options();
        let outputs: Vec<OutputRecord> = stream::iter(built.iter())
            .map(|record| check_record(lookup, record, compare))
            .buffered(config.max_concurrency.max(1))
            .try_collect()
            .await
            .context("DNS lookups aborted")?;

        for out in &outputs {
            if out.flu_exists {
                stats.increment_info(InfoType::ForwardRecordFound);
            }
            if out.flu_needs_update {
                stats.increment_info(InfoType::ForwardNeedsUpdate);
            }
            if out.rlu_exists {
                stats.increment_info(InfoType::ReverseRecordFound);
            }
            if out.rlu_needs_update {
                stats.increment_info(InfoType::ReverseNeedsUpdate);
            }
        }

        let written = export_output_csv(&outputs, config.output.as_deref())?;
        if let Some(path) = &config.rejects {
            export_rejects_csv(&rejected, path)?;
            info!("Rejected rows written to {}", path.display());
        }

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_processing_statistics(&stats);

        Ok(BuildReport {
            total_rows: raw_records.len(),
            written,
            rejected: rejected.len(),
            forward_updates: stats.get_info_count(InfoType::ForwardNeedsUpdate),
            reverse_updates: stats.get_info_count(InfoType::ReverseNeedsUpdate),
            output_path: config.output.clone().filter(|p| p.as_os_str() != "-"),
            elapsed_seconds,
        })
    }
}
