//! Persistence metrics tracking.
//!
//! Counts store activity so resets and failed writes are visible in logs and
//! can be asserted on in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for contact store activity.
///
/// Cloning is cheap and clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct StoreMetrics {
    loads_total: Arc<AtomicU64>,
    resets_total: Arc<AtomicU64>,
    saves_total: Arc<AtomicU64>,
    save_failures_total: Arc<AtomicU64>,
}

impl StoreMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a completed load.
    pub fn track_load(&self, contact_count: usize, reset: bool) {
        self.loads_total.fetch_add(1, Ordering::Relaxed);

        if reset {
            self.resets_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            contact_count = contact_count,
            reset = reset,
            "Contact load completed"
        );
    }

    /// Track a save attempt.
    pub fn track_save(&self, contact_count: usize, duration_ms: u128, success: bool) {
        self.saves_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.save_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            contact_count = contact_count,
            duration_ms = duration_ms,
            success = success,
            "Contact save completed"
        );
    }

    /// Get the total number of loads.
    pub fn loads_total(&self) -> u64 {
        self.loads_total.load(Ordering::Relaxed)
    }

    /// Get the number of loads that fell back to an empty collection.
    pub fn resets_total(&self) -> u64 {
        self.resets_total.load(Ordering::Relaxed)
    }

    /// Get the total number of save attempts.
    pub fn saves_total(&self) -> u64 {
        self.saves_total.load(Ordering::Relaxed)
    }

    /// Get the number of failed saves.
    pub fn save_failures_total(&self) -> u64 {
        self.save_failures_total.load(Ordering::Relaxed)
    }

    /// Log a summary of the counters at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            loads = self.loads_total(),
            resets = self.resets_total(),
            saves = self.saves_total(),
            save_failures = self.save_failures_total(),
            "Contact store metrics"
        );
    }
}
