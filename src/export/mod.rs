//! Export functionality for fqdn_builder results.
//!
//! This module writes the result rows and rejected rows of a run as CSV.

mod csv;

pub use self::csv::{export_output_csv, export_rejects_csv, write_output, write_rejects};
