//! Device records: CSV input, name normalization and FQDN/PTR construction.
//!
//! This module turns raw inventory rows into validated records:
//! - `input` reads rows leniently from CSV
//! - `normalize` maps hostnames, interfaces and domains onto DNS labels
//! - `builder` validates a row and builds its FQDN and PTR names
//! - `output` holds the result and reject row types
//!
//! Everything here is pure; DNS is only consulted later, in `dns`.

mod builder;
mod input;
mod normalize;
mod output;

// Re-export public API
pub use builder::{build_fqdn, build_ptr, build_record, parse_ipv4, BuiltRecord};
pub use input::{read_input, read_records, RawRecord, REQUIRED_COLUMNS};
pub use normalize::{
    abbreviate_interface, normalize_domain, normalize_hostname, normalize_interface,
    NormalizeOptions,
};
pub use output::{OutputRecord, RejectedRecord, OUTPUT_HEADERS, REJECT_HEADERS};

#[cfg(test)]
mod tests;
