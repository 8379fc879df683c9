//! Display formatting for terminal output
//!
//! Provides utilities for formatting readings, audit entries and error
//! outcomes for the interactive session and the one-shot commands.

pub mod audit;
pub mod message;
pub mod reading;

pub use audit::format_audit_log;
pub use message::describe_error;
pub use reading::{format_history, format_latest, format_overview};
