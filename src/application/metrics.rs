//! Observability metrics for debounced calls.
//!
//! Tracks how many invocations a debouncer received and what became of them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters describing a debouncer's activity.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same counters.
#[derive(Debug, Clone)]
pub struct DebounceMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total calls made through the wrapper
    invocations: AtomicU64,
    /// Pending calls cancelled by a newer invocation
    superseded: AtomicU64,
    /// Deferred calls that ran the target function
    executed: AtomicU64,
    /// Deferred calls that fired after being superseded and were dropped
    stale_dropped: AtomicU64,
}

impl DebounceMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                invocations: AtomicU64::new(0),
                superseded: AtomicU64::new(0),
                executed: AtomicU64::new(0),
                stale_dropped: AtomicU64::new(0),
            }),
        }
    }

    pub(crate) fn record_invocation(&self) {
        self.inner.invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_superseded(&self) {
        self.inner.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_executed(&self) {
        self.inner.executed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_stale_dropped(&self) {
        self.inner.stale_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of invocations.
    pub fn invocations(&self) -> u64 {
        self.inner.invocations.load(Ordering::Relaxed)
    }

    /// Get the number of pending calls replaced by newer ones.
    pub fn superseded(&self) -> u64 {
        self.inner.superseded.load(Ordering::Relaxed)
    }

    /// Get the number of times the target function ran.
    pub fn executed(&self) -> u64 {
        self.inner.executed.load(Ordering::Relaxed)
    }

    /// Get the number of deferred calls dropped after losing a cancellation race.
    pub fn stale_dropped(&self) -> u64 {
        self.inner.stale_dropped.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> DebounceMetricsSnapshot {
        DebounceMetricsSnapshot {
            invocations: self.invocations(),
            superseded: self.superseded(),
            executed: self.executed(),
            stale_dropped: self.stale_dropped(),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inner.invocations.store(0, Ordering::Relaxed);
        self.inner.superseded.store(0, Ordering::Relaxed);
        self.inner.executed.store(0, Ordering::Relaxed);
        self.inner.stale_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for DebounceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of debounce metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMetricsSnapshot {
    /// Total calls made through the wrapper
    pub invocations: u64,
    /// Pending calls cancelled by a newer invocation
    pub superseded: u64,
    /// Deferred calls that ran the target function
    pub executed: u64,
    /// Deferred calls dropped after losing a cancellation race
    pub stale_dropped: u64,
}

impl DebounceMetricsSnapshot {
    /// Fraction of invocations (0.0 to 1.0) that did not lead to an execution.
    ///
    /// Returns 0.0 if there were no invocations.
    pub fn coalescing_ratio(&self) -> f64 {
        if self.invocations == 0 {
            0.0
        } else {
            let coalesced = self.invocations.saturating_sub(self.executed);
            coalesced as f64 / self.invocations as f64
        }
    }
}
