//! In-memory log sink.
//!
//! Default collaborator for local runs and tests. Stores records in
//! insertion order behind an `RwLock`; `entries()` hands out a snapshot
//! so readers never hold the lock across awaits.

use std::sync::RwLock;

use crate::sink::{LogEntry, LogSink, SinkError};

#[derive(Debug, Default)]
pub struct InMemoryLogSink {
    entries: RwLock<Vec<LogEntry>>,
}

impl InMemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records persisted so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl LogSink for InMemoryLogSink {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SinkError::Unavailable("store lock poisoned".to_string()))?;
        entries.push(entry);
        Ok(())
    }
}
