//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, row validation, DNS lookup)
//! - Processing statistics tracking (rejected rows, lookup outcomes)
//!
//! Outcomes are categorized into:
//! - **Rejects**: Rows that failed validation and were left out of the output
//! - **Info**: Lookup outcomes worth summarizing (records found, updates needed)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{InfoType, InitializationError, LookupError, RejectReason, ValidationError};
