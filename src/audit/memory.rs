//! In-memory audit log

use std::sync::RwLock;

use super::entry::AuditEntry;
use super::sink::{AuditSink, AuditSource};
use crate::error::MeterResult;
use crate::storage::{read_poisoned, write_poisoned};

/// Audit trail kept in process memory
#[derive(Default)]
pub struct MemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries
    pub fn len(&self) -> MeterResult<usize> {
        Ok(self.entries.read().map_err(read_poisoned)?.len())
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> MeterResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, entry: &AuditEntry) -> MeterResult<()> {
        self.entries
            .write()
            .map_err(write_poisoned)?
            .push(entry.clone());
        Ok(())
    }
}

impl AuditSource for MemoryAuditLog {
    fn entries(&self) -> MeterResult<Vec<AuditEntry>> {
        Ok(self.entries.read().map_err(read_poisoned)?.clone())
    }
}
