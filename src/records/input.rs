//! CSV input parsing.
//!
//! Rows are read leniently: cells are trimmed, blank cells count as absent,
//! unknown columns are ignored and short or long rows are tolerated. Only the
//! presence of the two required columns is checked here; per-row validation
//! happens in the builder so one bad row never stops the run.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

/// Columns that must appear in the input header.
pub const REQUIRED_COLUMNS: [&str; 2] = ["ip_address", "device_hostname"];

/// One input row as read from the CSV, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub ip_address: Option<String>,
    pub device_hostname: Option<String>,
    pub interface_name: Option<String>,
    pub domain_name: Option<String>,
    /// First column whose cell was not valid UTF-8; its value above is a
    /// lossy decoding kept for the rejects file
    pub invalid_utf8_column: Option<&'static str>,
}

/// Positions of the known columns in the header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    ip_address: usize,
    device_hostname: usize,
    interface_name: Option<usize>,
    domain_name: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            find(name).with_context(|| format!("Input is missing required column '{name}'"))
        };
        Ok(ColumnIndex {
            ip_address: required(REQUIRED_COLUMNS[0])?,
            device_hostname: required(REQUIRED_COLUMNS[1])?,
            interface_name: find("interface_name"),
            // `domain` is the older export name; `domain_name` wins when both exist
            domain_name: find("domain_name").or_else(|| find("domain")),
        })
    }

    fn extract(&self, record: &ByteRecord, row: usize) -> RawRecord {
        let mut invalid = None;
        let mut cell = |index: Option<usize>, column: &'static str| {
            let bytes = record.get(index?)?;
            let text = match std::str::from_utf8(bytes) {
                Ok(text) => text.trim().to_string(),
                Err(_) => {
                    invalid.get_or_insert(column);
                    String::from_utf8_lossy(bytes).trim().to_string()
                }
            };
            (!text.is_empty()).then_some(text)
        };
        let ip_address = cell(Some(self.ip_address), "ip_address");
        let device_hostname = cell(Some(self.device_hostname), "device_hostname");
        let interface_name = cell(self.interface_name, "interface_name");
        let domain_name = cell(self.domain_name, "domain_name");
        RawRecord {
            row,
            ip_address,
            device_hostname,
            interface_name,
            domain_name,
            invalid_utf8_column: invalid,
        }
    }
}

/// Reads all device rows from a CSV source.
///
/// Cells are decoded per row, so a cell that is not valid UTF-8 only marks
/// its own row (see [`RawRecord::invalid_utf8_column`]).
///
/// # Errors
///
/// Returns an error if the header is unreadable or missing a required column,
/// or if reading the source fails.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut record = ByteRecord::new();
    let mut row = 0;
    while reader
        .read_byte_record(&mut record)
        .with_context(|| format!("Failed to read input row {}", row + 1))?
    {
        row += 1;
        records.push(columns.extract(&record, row));
    }
    Ok(records)
}

/// Reads device rows from a file, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<Vec<RawRecord>> {
    if path.as_os_str() == "-" {
        log::info!("Reading device rows from stdin");
        return read_records(io::stdin().lock());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_records(file).with_context(|| format!("Failed to read {}", path.display()))
}
