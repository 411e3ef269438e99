//! Severity level definitions

use super::error::LoggerError;
use super::logger::Log;
use super::sink::Sink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Severity of a log statement, ordered from most to least severe.
///
/// A statement passes the reporting threshold when `level <= threshold`,
/// so `Error` always passes unless nothing does, and `Debug` passes only
/// under the least restrictive threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum Severity {
    #[serde(rename = "ERROR")]
    Error = 0,
    #[serde(rename = "WARNING")]
    Warn = 1,
    #[default]
    #[serde(rename = "INFO")]
    Info = 2,
    #[serde(rename = "DEBUG")]
    Debug = 3,
}

impl Severity {
    /// All variants, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Canonical uppercase name, used both for display and for parsing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    pub(crate) const fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Error),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Info),
            3 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Number of tab characters placed after the level prefix.
    ///
    /// Levels below `Debug` would be indented one tab per step. With the
    /// four fixed variants this is always zero.
    pub const fn indent_depth(self) -> usize {
        (self as u8).saturating_sub(Severity::Debug as u8) as usize
    }

    /// Parse a canonical level name, falling back to `Info`.
    ///
    /// Matching is exact and case-sensitive. Any other input logs a warning
    /// through the installed sink and yields `Info`; the caller never sees
    /// a failure. Use [`str::parse`] when an error value is wanted instead.
    pub fn from_name(name: &str) -> Severity {
        Self::parse_or_warn(name, Log::new())
    }

    /// Same as [`Severity::from_name`], reporting the fallback warning to
    /// `sink` instead of the installed sink.
    pub fn from_name_to(name: &str, sink: Arc<dyn Sink>) -> Severity {
        Self::parse_or_warn(name, Log::with_sink(sink))
    }

    fn parse_or_warn(name: &str, mut log: Log) -> Severity {
        match name.parse() {
            Ok(level) => level,
            Err(_) => {
                log.get(Severity::Warn)
                    .append("Unknown logging level '")
                    .append(name)
                    .append("'. Using INFO level as default.");
                Severity::Info
            }
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Error => Red,
            Severity::Warn => Yellow,
            Severity::Info => Green,
            Severity::Debug => Blue,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_ordering_matches_discriminants() {
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        for level in Severity::ALL {
            assert_eq!(Severity::from_repr(level as u8), Some(level));
        }
        assert_eq!(Severity::from_repr(4), None);
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Warn.as_str(), "WARNING");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Warn.to_string(), "WARNING");
    }

    #[test]
    fn test_strict_parse_is_case_sensitive() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warn);
        assert!("WARN".parse::<Severity>().is_err());
        assert!("debug".parse::<Severity>().is_err());
        assert!(" INFO".parse::<Severity>().is_err());
    }

    #[test]
    fn test_indent_depth_is_zero_for_fixed_levels() {
        for level in Severity::ALL {
            assert_eq!(level.indent_depth(), 0);
        }
    }

    #[test]
    fn test_from_name_known_emits_nothing() {
        let sink = Arc::new(MemorySink::new());
        assert_eq!(Severity::from_name_to("ERROR", sink.clone()), Severity::Error);
        assert_eq!(Severity::from_name_to("DEBUG", sink.clone()), Severity::Debug);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_from_name_unknown_falls_back_with_warning() {
        let sink = Arc::new(MemorySink::new());
        assert_eq!(Severity::from_name_to("bogus", sink.clone()), Severity::Info);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Severity::Warn);
        assert!(records[0]
            .1
            .ends_with(" WARNING: Unknown logging level 'bogus'. Using INFO level as default."));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Severity::Warn).expect("serialize");
        assert_eq!(json, "\"WARNING\"");
        let level: Severity = serde_json::from_str("\"DEBUG\"").expect("deserialize");
        assert_eq!(level, Severity::Debug);
        assert!(serde_json::from_str::<Severity>("\"WARN\"").is_err());
    }
}
