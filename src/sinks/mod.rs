//! Sink implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;
pub mod tagged;

pub use console::ConsoleSink;
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
pub use tagged::TaggedSink;

pub use crate::core::Sink;

use std::sync::Arc;

/// Tag used by the platform-log sink when none is configured.
pub const DEFAULT_TAG: &str = "NativeModule";

/// The sink used when none was installed.
///
/// Chosen at build time: the platform log service style on Android (or with
/// the `tagged-default` feature), standard error everywhere else.
pub fn default_sink() -> Arc<dyn Sink> {
    #[cfg(any(target_os = "android", feature = "tagged-default"))]
    {
        Arc::new(TaggedSink::new(DEFAULT_TAG))
    }
    #[cfg(not(any(target_os = "android", feature = "tagged-default")))]
    {
        Arc::new(ConsoleSink::new())
    }
}
