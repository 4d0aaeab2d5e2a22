//! CSV export functionality.
//!
//! Writes result rows (one per valid input row, in input order) and, when
//! requested, the rows that were rejected during validation.

use anyhow::{bail, Context, Result};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::records::{OutputRecord, RejectedRecord, OUTPUT_HEADERS, REJECT_HEADERS};

fn write_rows<W: Write, T: Serialize>(sink: W, headers: &[&str], rows: &[T]) -> Result<usize> {
    // Header is written by hand so an empty result still gets one
    let mut writer: Writer<W> = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) if path.as_os_str() != "-" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        _ => Ok(Box::new(io::stdout())),
    }
}

/// Writes result rows as CSV to any writer.
///
/// Returns the number of rows written (header excluded).
pub fn write_output<W: Write>(sink: W, records: &[OutputRecord]) -> Result<usize> {
    write_rows(sink, &OUTPUT_HEADERS, records)
}

/// Writes rejected rows as CSV to any writer.
pub fn write_rejects<W: Write>(sink: W, rejects: &[RejectedRecord]) -> Result<usize> {
    write_rows(sink, &REJECT_HEADERS, rejects)
}

/// Exports result rows to a file, or stdout when `output` is `None` or `-`.
pub fn export_output_csv(records: &[OutputRecord], output: Option<&Path>) -> Result<usize> {
    let sink = open_sink(output)?;
    write_output(sink, records).context("Failed to write result CSV")
}

/// Exports rejected rows to a file.
///
/// `-` is refused: stdout carries the result CSV.
pub fn export_rejects_csv(rejects: &[RejectedRecord], path: &Path) -> Result<usize> {
    if path.as_os_str() == "-" {
        bail!("Rejects must be written to a file, not stdout");
    }
    let sink = open_sink(Some(path))?;
    write_rejects(sink, rejects).context("Failed to write rejects CSV")
}
