//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `fqdn_builder` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use fqdn_builder::initialization::init_logger_with;
use fqdn_builder::{run_build, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env lets FQDN_DEFAULT_DOMAIN be set per site without exporting it
    // Try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Summary goes to stderr; stdout may be carrying the result CSV
    match run_build(config).await {
        Ok(report) => {
            eprintln!(
                "✅ Built {} record{} from {} row{} ({} rejected, {} forward / {} reverse need updates) in {:.1}s",
                report.written,
                if report.written == 1 { "" } else { "s" },
                report.total_rows,
                if report.total_rows == 1 { "" } else { "s" },
                report.rejected,
                report.forward_updates,
                report.reverse_updates,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output_path {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("fqdn_builder error: {:#}", e);
            process::exit(1);
        }
    }
}
