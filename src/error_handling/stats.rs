//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for rejected rows and notable
//! lookup outcomes during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{InfoType, RejectReason};

/// Thread-safe processing statistics tracker.
///
/// Counters are atomic, so a single instance can be shared between the
/// concurrent lookup futures of a run. Every variant is initialized to zero
/// on creation.
pub struct ProcessingStats {
    rejects: HashMap<RejectReason, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut rejects = HashMap::new();
        for reason in RejectReason::iter() {
            rejects.insert(reason, AtomicUsize::new(0));
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, AtomicUsize::new(0));
        }

        ProcessingStats { rejects, info }
    }

    /// Increment a reject counter.
    pub fn increment_reject(&self, reason: RejectReason) {
        if let Some(counter) = self.rejects.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment reject counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                reason
            );
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                info_type
            );
        }
    }

    /// Get the count for a reject reason.
    pub fn get_reject_count(&self, reason: RejectReason) -> usize {
        self.rejects
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total reject count across all reasons.
    pub fn total_rejects(&self) -> usize {
        RejectReason::iter().map(|r| self.get_reject_count(r)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}
