//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CounterType, Month, User};

/// Kinds of events recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// A new user registered
    UserRegistered,
    /// A user logged in
    UserAuthenticated,
    /// A monthly reading was submitted
    ReadingSubmitted,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::UserRegistered => write!(f, "REGISTER"),
            AuditEvent::UserAuthenticated => write!(f, "LOGIN"),
            AuditEvent::ReadingSubmitted => write!(f, "SUBMIT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub event: AuditEvent,

    /// Username of the acting user
    pub username: String,

    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    fn now(event: AuditEvent, username: &str, detail: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            username: username.to_string(),
            detail,
        }
    }

    /// Entry for a successful registration
    pub fn registered(user: &User) -> Self {
        Self::now(
            AuditEvent::UserRegistered,
            &user.username,
            Some(format!("registered new {} account", user.role)),
        )
    }

    /// Entry for a successful login
    pub fn authenticated(user: &User) -> Self {
        Self::now(AuditEvent::UserAuthenticated, &user.username, None)
    }

    /// Entry for a successful reading submission
    pub fn reading_submitted(
        user: &User,
        counter_type: CounterType,
        month: Month,
        value: i64,
    ) -> Self {
        Self::now(
            AuditEvent::ReadingSubmitted,
            &user.username,
            Some(format!("{} for {}: {}", counter_type, month, value)),
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.username
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" - {}", detail));
        }

        output
    }
}
