//! In-memory sink
//!
//! Keeps every line it receives. Handy for tests and for embedders that
//! forward log text somewhere else on their own schedule.

use crate::core::{Result, Severity, Sink};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything captured so far, in arrival order.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<(Severity, String)> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, level: Severity, line: &str) -> Result<()> {
        self.records.lock().push((level, line.to_string()));
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_take() {
        let sink = MemorySink::new();
        sink.write(Severity::Info, "one").unwrap();
        sink.write(Severity::Error, "two").unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["one", "two"]);

        let taken = sink.take();
        assert_eq!(taken[1], (Severity::Error, "two".to_string()));
        assert!(sink.is_empty());
    }
}
