//! Logger metrics for observability
//!
//! Counts what happened to log statements at drop time. Useful for
//! spotting a failing sink, since sink errors are never returned to the
//! code that logged.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for decided log statements
///
/// # Example
///
/// ```
/// use scope_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// assert_eq!(metrics.total_decided(), 2);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to a sink successfully
    emitted_count: AtomicU64,

    /// Statements discarded by the threshold
    filtered_count: AtomicU64,

    /// Lines the sink rejected or panicked on
    failed_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            emitted_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    pub fn total_decided(&self) -> u64 {
        self.emitted_count() + self.filtered_count() + self.failed_count()
    }

    /// Returns the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: LoggerMetrics = LoggerMetrics::new();

/// Process-wide counters updated by every log statement.
pub fn metrics() -> &'static LoggerMetrics {
    &METRICS
}
