//! Platform-log style sink
//!
//! Mirrors a system log service that keys records by priority channel and a
//! fixed tag. Each record is written as `<channel>/<tag>: <line>`.

use crate::core::{Result, Severity, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

pub struct TaggedSink {
    tag: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TaggedSink {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_writer(tag, io::stderr())
    }

    pub fn with_writer(tag: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            tag: tag.into(),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Priority channel a severity is routed to.
    pub fn channel(level: Severity) -> char {
        match level {
            Severity::Error => 'E',
            Severity::Warn => 'W',
            Severity::Info => 'I',
            Severity::Debug => 'D',
        }
    }
}

impl Sink for TaggedSink {
    fn write(&self, level: Severity, line: &str) -> Result<()> {
        let record = format!("{}/{}: {}\n", Self::channel(level), self.tag, line);
        let mut writer = self.writer.lock();
        writer.write_all(record.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "tagged"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_carry_channel_and_tag() {
        let buf = SharedBuf::default();
        let sink = TaggedSink::with_writer("NativeModule", buf.clone());
        sink.write(Severity::Warn, "careful").unwrap();
        sink.write(Severity::Debug, "detail").unwrap();

        let out = String::from_utf8(buf.0.lock().clone()).unwrap();
        assert_eq!(out, "W/NativeModule: careful\nD/NativeModule: detail\n");
    }

    #[test]
    fn test_channels() {
        let channels: String = Severity::ALL.iter().map(|l| TaggedSink::channel(*l)).collect();
        assert_eq!(channels, "EWID");
    }
}
