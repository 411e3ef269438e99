//! Scoped log statement
//!
//! A [`Log`] is created for one statement, activated with a severity,
//! filled with text, and decided when it is dropped: if its severity passes
//! the reporting threshold at that moment the whole buffer goes to the sink
//! in a single write, otherwise it is discarded.
//!
//! ```
//! use scope_log::{Log, Severity};
//! use std::fmt::Write;
//!
//! let port = 8080;
//! Log::new().get(Severity::Info).append("listening on port ").append(port);
//!
//! let mut log = Log::new();
//! write!(log.get(Severity::Debug), "{} workers", 4).unwrap();
//! // `log` is written when it goes out of scope here
//! ```

use super::{
    log_level::Severity,
    metrics::metrics,
    sink::{installed_sink, Sink},
    threshold::{global_threshold, Threshold},
    timestamp::now_time,
};
use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

pub struct Log {
    /// `None` until activated; an unactivated statement never writes
    level: Option<Severity>,
    buffer: String,
    /// Resolved to the installed sink at drop when `None`
    sink: Option<Arc<dyn Sink>>,
    /// The global threshold when `None`
    threshold: Option<Arc<Threshold>>,
}

/// Alias kept for code written against the file-logger name.
pub type FileLog = Log;

impl Log {
    /// A statement that reports to the installed sink under the global
    /// threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: None,
            buffer: String::new(),
            sink: None,
            threshold: None,
        }
    }

    /// A statement bound to a specific sink.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        let mut log = Self::new();
        log.sink = Some(sink);
        log
    }

    /// Gate this statement on `threshold` instead of the global one.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Arc<Threshold>) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Activate the statement at `level` and write the line prefix.
    ///
    /// The prefix is `<HH:MM:SS.mmm> <LEVEL>: ` followed by
    /// [`Severity::indent_depth`] tabs. Activating twice replaces the level
    /// and appends a second prefix.
    pub fn get(&mut self, level: Severity) -> &mut Self {
        self.level = Some(level);
        self.buffer.push_str(&now_time());
        self.buffer.push(' ');
        self.buffer.push_str(level.as_str());
        self.buffer.push_str(": ");
        self.buffer
            .extend(std::iter::repeat('\t').take(level.indent_depth()));
        self
    }

    /// Activate at the default level, `Info`.
    pub fn get_default(&mut self) -> &mut Self {
        self.get(Severity::default())
    }

    /// Append a value's `Display` output verbatim.
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{}", value);
        self
    }

    /// Severity captured by the last activation, if any.
    pub fn level(&self) -> Option<Severity> {
        self.level
    }

    /// Text accumulated so far, prefix included.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Run `block` only when `level` passes the global threshold.
    pub fn run<F: FnOnce()>(level: Severity, block: F) {
        if global_threshold().passes(level) {
            block();
        }
    }

    /// A statement already activated at `Error`.
    pub fn error() -> Self {
        Self::activated(Severity::Error)
    }

    /// Activated at `Warn`.
    pub fn warn() -> Self {
        Self::activated(Severity::Warn)
    }

    /// Activated at `Info`.
    pub fn info() -> Self {
        Self::activated(Severity::Info)
    }

    /// Activated at `Debug`.
    pub fn debug() -> Self {
        Self::activated(Severity::Debug)
    }

    fn activated(level: Severity) -> Self {
        let mut log = Self::new();
        log.get(level);
        log
    }

    fn emit(&mut self, level: Severity) {
        let sink = self.sink.take().unwrap_or_else(installed_sink);
        let line = std::mem::take(&mut self.buffer);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.write(level, &line)
        }));

        match result {
            Ok(Ok(())) => {
                metrics().record_emitted();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                metrics().record_failed();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}",
                    sink.name(),
                    panic_msg
                );
                metrics().record_failed();
            }
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for Log {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("level", &self.level)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl Drop for Log {
    fn drop(&mut self) {
        let Some(level) = self.level else {
            return;
        };

        let passes = match &self.threshold {
            Some(threshold) => threshold.passes(level),
            None => global_threshold().passes(level),
        };

        if passes {
            self.emit(level);
        } else {
            metrics().record_filtered();
        }
    }
}
