//! Sink trait for finished log lines, and the process-wide installed sink

use super::{error::LoggerError, error::Result, log_level::Severity};
use std::sync::{Arc, OnceLock};

/// Destination for finished log lines.
///
/// A sink receives each line exactly once, as a single call, from whichever
/// thread dropped the log statement. Implementations must serialize their
/// own writes so concurrent lines never interleave.
pub trait Sink: Send + Sync {
    fn write(&self, level: Severity, line: &str) -> Result<()>;
    fn name(&self) -> &str;
}

static INSTALLED: OnceLock<Arc<dyn Sink>> = OnceLock::new();

/// Install the process-wide sink.
///
/// This is a configuration-time operation: it succeeds at most once, and
/// only before the first log statement resolves the sink. After that the
/// platform default is locked in and this returns
/// [`LoggerError::SinkAlreadyInstalled`].
pub fn install_sink(sink: Arc<dyn Sink>) -> Result<()> {
    INSTALLED
        .set(sink)
        .map_err(|_| LoggerError::SinkAlreadyInstalled)
}

/// The process-wide sink, resolving to the platform default on first use.
pub fn installed_sink() -> Arc<dyn Sink> {
    Arc::clone(INSTALLED.get_or_init(crate::sinks::default_sink))
}
