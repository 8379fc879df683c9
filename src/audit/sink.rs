//! Audit trail interfaces

use super::entry::AuditEntry;
use crate::error::MeterResult;

/// Destination for audit entries
pub trait AuditSink {
    /// Record one entry
    fn record(&self, entry: &AuditEntry) -> MeterResult<()>;
}

/// Readable audit trail
pub trait AuditSource {
    /// All entries, oldest first
    fn entries(&self) -> MeterResult<Vec<AuditEntry>>;

    /// The most recent `count` entries, oldest first
    fn recent(&self, count: usize) -> MeterResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}

/// A trail that can be both written and read
pub trait AuditTrail: AuditSink + AuditSource {}

impl<T: AuditSink + AuditSource + ?Sized> AuditTrail for T {}

impl<T: AuditSink + ?Sized> AuditSink for &T {
    fn record(&self, entry: &AuditEntry) -> MeterResult<()> {
        (**self).record(entry)
    }
}

impl<T: AuditSource + ?Sized> AuditSource for &T {
    fn entries(&self) -> MeterResult<Vec<AuditEntry>> {
        (**self).entries()
    }
}

/// Sink that prints every entry before forwarding it
///
/// Output goes to stdout as `Audit: <entry>`.
pub struct EchoAuditSink<S> {
    inner: S,
}

impl<S> EchoAuditSink<S> {
    /// Wrap another sink
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: AuditSink> AuditSink for EchoAuditSink<S> {
    fn record(&self, entry: &AuditEntry) -> MeterResult<()> {
        println!("Audit: {}", entry.format_human_readable());
        self.inner.record(entry)
    }
}

impl<S: AuditSource> AuditSource for EchoAuditSink<S> {
    fn entries(&self) -> MeterResult<Vec<AuditEntry>> {
        self.inner.entries()
    }
}
