//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{InfoType, ProcessingStats, RejectReason};

/// Prints reject and lookup-outcome counts to the log.
///
/// Categories with a zero count are skipped.
pub fn print_processing_statistics(stats: &ProcessingStats) {
    let total_rejects = stats.total_rejects();
    let total_info = stats.total_info();

    if total_rejects > 0 {
        info!("Rejected rows ({} total):", total_rejects);
        for reason in RejectReason::iter() {
            let count = stats.get_reject_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Lookup outcomes:");
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
