//! File sink implementation

use crate::core::{LoggerError, Result, Severity, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one newline-terminated line per record, flushing after each.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, _level: Severity, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_lines() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("app.log");

        let sink = FileSink::new(&path).expect("open");
        sink.write(Severity::Info, "first").unwrap();
        sink.write(Severity::Error, "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("app.log");

        match FileSink::new(&path) {
            Err(LoggerError::IoOperation { operation, .. }) => {
                assert_eq!(operation, "opening log file")
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected open failure"),
        }
    }
}
