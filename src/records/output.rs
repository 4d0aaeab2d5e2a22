//! Output row types.

use serde::Serialize;

use crate::error_handling::ValidationError;

use super::input::RawRecord;

/// Header of the result CSV, in column order.
pub const OUTPUT_HEADERS: [&str; 9] = [
    "FQDN",
    "PTR",
    "IP Address",
    "FLU Exists",
    "FLU Existing Value",
    "FLU Needs Update",
    "RLU Exists",
    "RLU Existing Value",
    "RLU Needs Update",
];

/// Header of the rejects CSV, in column order.
pub const REJECT_HEADERS: [&str; 5] = [
    "row",
    "ip_address",
    "device_hostname",
    "interface_name",
    "error",
];

/// One result row: built names plus what forward (FLU) and reverse (RLU)
/// DNS currently hold for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "FQDN")]
    pub fqdn: String,
    #[serde(rename = "PTR")]
    pub ptr: String,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
    #[serde(rename = "FLU Exists")]
    pub flu_exists: bool,
    #[serde(rename = "FLU Existing Value")]
    pub flu_existing_value: Option<String>,
    #[serde(rename = "FLU Needs Update")]
    pub flu_needs_update: bool,
    #[serde(rename = "RLU Exists")]
    pub rlu_exists: bool,
    #[serde(rename = "RLU Existing Value")]
    pub rlu_existing_value: Option<String>,
    #[serde(rename = "RLU Needs Update")]
    pub rlu_needs_update: bool,
}

/// An input row that failed validation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub row: usize,
    pub ip_address: Option<String>,
    pub device_hostname: Option<String>,
    pub interface_name: Option<String>,
    pub error: String,
}

impl RejectedRecord {
    pub fn new(raw: &RawRecord, error: &ValidationError) -> Self {
        RejectedRecord {
            row: raw.row,
            ip_address: raw.ip_address.clone(),
            device_hostname: raw.device_hostname.clone(),
            interface_name: raw.interface_name.clone(),
            error: error.to_string(),
        }
    }
}
