//! Start-up configuration
//!
//! A [`LogConfig`] names the reporting level and which sink to install. It
//! is meant to be applied once, early, before the first log statement
//! resolves the process-wide sink.
//!
//! ```
//! use scope_log::{LogConfig, Severity};
//!
//! let config = LogConfig::from_json(r#"{ "level": "WARNING", "newline": true }"#).unwrap();
//! assert_eq!(config.level, Severity::Warn);
//! ```

use super::{
    error::{LoggerError, Result},
    log_level::Severity,
    sink::{install_sink, Sink},
    threshold::set_reporting_level,
};
use crate::sinks::{ConsoleSink, TaggedSink, DEFAULT_TAG};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable read by [`LogConfig::from_env`].
pub const LEVEL_ENV_VAR: &str = "SCOPE_LOG_LEVEL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Leave the build-time platform default in place
    #[default]
    Default,
    Console,
    Tagged,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: Severity,
    pub sink: SinkKind,
    /// Terminate console lines with `\n`
    pub newline: bool,
    /// Colour console lines by severity
    pub colors: bool,
    /// Tag for the platform-log sink
    pub tag: String,
    /// Target of the file sink
    pub file_path: Option<PathBuf>,
    /// Level name that failed to parse; reported once the sink is in place
    #[serde(skip)]
    unknown_level: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
            sink: SinkKind::Default,
            newline: false,
            colors: false,
            tag: DEFAULT_TAG.to_string(),
            file_path: None,
            unknown_level: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration.
    ///
    /// A `level` string that is not a canonical name selects `Info`, with
    /// the warning deferred to [`LogConfig::apply`], the same as
    /// [`LogConfig::from_env`]. Malformed JSON and other bad fields are
    /// errors. Deserializing a `LogConfig` directly through serde stays
    /// strict about the level.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let level_name = match value.as_object_mut() {
            Some(fields) if matches!(fields.get("level"), Some(serde_json::Value::String(_))) => {
                fields.remove("level")
            }
            _ => None,
        };

        let config: Self = serde_json::from_value(value)?;
        Ok(match level_name {
            Some(serde_json::Value::String(name)) => config.with_level_name(&name),
            _ => config,
        })
    }

    /// Defaults, with the level taken from `SCOPE_LOG_LEVEL` when set.
    ///
    /// An unrecognised name selects `Info`; the warning about it is logged
    /// by [`LogConfig::apply`], after the configured sink is installed.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(LEVEL_ENV_VAR) {
            Ok(name) => config.with_level_name(&name),
            Err(_) => config,
        }
    }

    /// Set the level from a name, deferring the unknown-name warning.
    #[must_use]
    pub fn with_level_name(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(level) => {
                self.level = level;
                self.unknown_level = None;
            }
            Err(_) => {
                self.level = Severity::Info;
                self.unknown_level = Some(name.to_string());
            }
        }
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self.unknown_level = None;
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Build the configured sink, or `None` for the platform default.
    pub fn build_sink(&self) -> Result<Option<Arc<dyn Sink>>> {
        let sink: Arc<dyn Sink> = match self.sink {
            SinkKind::Default => return Ok(None),
            SinkKind::Console => Arc::new(
                ConsoleSink::new()
                    .with_newline(self.newline)
                    .with_colors(self.colors),
            ),
            SinkKind::Tagged => Arc::new(TaggedSink::new(self.tag.clone())),
            SinkKind::File => self.build_file_sink()?,
        };
        Ok(Some(sink))
    }

    #[cfg(feature = "file")]
    fn build_file_sink(&self) -> Result<Arc<dyn Sink>> {
        let path = self
            .file_path
            .as_ref()
            .ok_or_else(|| LoggerError::config("LogConfig", "file sink requires file_path"))?;
        Ok(Arc::new(crate::sinks::FileSink::new(path.clone())?))
    }

    #[cfg(not(feature = "file"))]
    fn build_file_sink(&self) -> Result<Arc<dyn Sink>> {
        Err(LoggerError::config(
            "LogConfig",
            "file sink requires the `file` feature",
        ))
    }

    /// Install the sink, set the reporting level, then report a level name
    /// that could not be parsed.
    pub fn apply(&self) -> Result<()> {
        if let Some(sink) = self.build_sink()? {
            install_sink(sink)?;
        }
        set_reporting_level(self.level);
        if let Some(name) = &self.unknown_level {
            let _ = Severity::from_name(name);
        }
        Ok(())
    }
}
