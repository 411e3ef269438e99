//! Console sink implementation

use crate::core::{Result, Severity, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each line to standard error and flushes immediately.
///
/// Lines carry no terminator unless [`ConsoleSink::with_newline`] is set,
/// matching the line format where callers append their own break.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    newline: bool,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Console-style sink over any writer; mainly for capturing output.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            newline: false,
            use_colors: false,
        }
    }

    /// Terminate every line with `\n`.
    #[must_use]
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    /// Colour whole lines by severity. Ignored without the `console`
    /// feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn render(&self, level: Severity, line: &str) -> String {
        let mut output = self.colorize(level, line);
        if self.newline {
            output.push('\n');
        }
        output
    }

    #[cfg(feature = "console")]
    fn colorize(&self, level: Severity, line: &str) -> String {
        use colored::Colorize;
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, _level: Severity, line: &str) -> String {
        line.to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, level: Severity, line: &str) -> Result<()> {
        let output = self.render(level, line);
        let mut writer = self.writer.lock();
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
