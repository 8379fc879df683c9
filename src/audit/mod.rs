//! Audit trail for meterbook
//!
//! Records successful registrations, logins and reading submissions as
//! human-readable entries. The session layer receives an [`AuditSink`] and
//! reports events to it; the core services never touch the audit trail.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single event with timestamp, actor and detail.
//! - `AuditSink` / `AuditSource`: write and read sides of an audit trail;
//!   `AuditTrail` is anything that is both.
//! - `AuditLogger`: append-only JSONL file.
//! - `MemoryAuditLog`: in-process list, used when file auditing is off.
//! - `EchoAuditSink`: forwards to another sink and prints each entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use meterbook::audit::{AuditEntry, AuditLogger, AuditSink};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.record(&AuditEntry::registered(&user))?;
//! ```

mod entry;
mod logger;
mod memory;
mod sink;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
pub use memory::MemoryAuditLog;
pub use sink::{AuditSink, AuditSource, AuditTrail, EchoAuditSink};
