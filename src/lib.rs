//! # scope_log
//!
//! A minimal leveled logger built around one mechanism: a log statement is a
//! scoped value that collects text and, when it is dropped, writes that text
//! in a single call if its severity passes the process-wide threshold.
//!
//! ## Features
//!
//! - **Four severities**: `ERROR`, `WARNING`, `INFO`, `DEBUG`
//! - **Flush on drop**: the emit decision happens once, at end of scope
//! - **Runtime threshold**: an atomic, changeable from any thread
//! - **Pluggable sinks**: console, platform-log style, file, memory
//!
//! ```
//! use scope_log::{logi, logw, Severity};
//!
//! scope_log::set_reporting_level(Severity::Info);
//! logi!("server started on port {}", 8080);
//! logw!("cache miss ratio {:.1}%", 12.5);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        install_sink, reporting_level, set_reporting_level, FileLog, Log, LogConfig,
        LoggerError, LoggerMetrics, Result, Severity, Sink, SinkKind, Threshold,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, TaggedSink};
}

pub use crate::core::{
    global_threshold, install_sink, installed_sink, metrics, now_time, reporting_level,
    set_reporting_level, FileLog, Log, LogConfig, LoggerError, LoggerMetrics, Result, Severity,
    Sink, SinkKind, Threshold,
};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{ConsoleSink, MemorySink, TaggedSink};
