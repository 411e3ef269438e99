//! Process-wide reporting threshold

use super::log_level::Severity;
use std::sync::atomic::{AtomicU8, Ordering};

/// A mutable severity threshold shared between threads.
///
/// Reads and writes use relaxed ordering: a log statement that observes the
/// previous value for one check is acceptable.
#[derive(Debug)]
pub struct Threshold {
    level: AtomicU8,
}

impl Threshold {
    pub const fn new(level: Severity) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    #[inline]
    pub fn get(&self) -> Severity {
        // Only valid discriminants are ever stored.
        Severity::from_repr(self.level.load(Ordering::Relaxed)).unwrap_or(Severity::Debug)
    }

    #[inline]
    pub fn set(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a statement at `level` would be emitted right now.
    #[inline]
    pub fn passes(&self, level: Severity) -> bool {
        level <= self.get()
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

static REPORTING_LEVEL: Threshold = Threshold::new(Severity::Debug);

/// The threshold consulted by every [`Log`](crate::Log) that was not given
/// its own.
pub fn global_threshold() -> &'static Threshold {
    &REPORTING_LEVEL
}

/// Current process-wide reporting level. Defaults to `Debug`.
pub fn reporting_level() -> Severity {
    REPORTING_LEVEL.get()
}

/// Change the process-wide reporting level.
///
/// Takes effect for every log statement dropped afterwards; statements that
/// were already decided are unaffected.
pub fn set_reporting_level(level: Severity) {
    REPORTING_LEVEL.set(level);
}
