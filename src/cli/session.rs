//! Session state
//!
//! A `Session` remembers the authenticated user, calls the services on its
//! behalf and reports successful operations to the audit trail.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditTrail};
use crate::crypto::HashingParams;
use crate::error::{MeterError, MeterResult};
use crate::models::{CounterType, Month, Role, User};
use crate::services::{CounterService, UserService};
use crate::storage::Storage;

/// One user's interactive session
pub struct Session<'a, A: AuditTrail + ?Sized = dyn AuditTrail> {
    users: UserService<'a>,
    counters: CounterService<'a>,
    audit: &'a A,
    current_user: Option<User>,
}

impl<'a, A: AuditTrail + ?Sized> Session<'a, A> {
    /// Start a session with nobody logged in
    pub fn new(storage: &'a Storage, hashing: HashingParams, audit: &'a A) -> Self {
        Self {
            users: UserService::with_hashing(storage, hashing),
            counters: CounterService::new(storage),
            audit,
            current_user: None,
        }
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    fn require_user(&self) -> MeterResult<&User> {
        self.current_user.as_ref().ok_or(MeterError::NotAuthenticated)
    }

    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.record(&entry) {
            warn!(error = %e, event = %entry.event, "failed to record audit entry");
        }
    }

    /// Register a new user; does not log them in
    pub fn register(&mut self, username: &str, password: &str, role: Role) -> MeterResult<User> {
        let user = self.users.register(username, password, role)?;

        info!(username = %user.username, role = %user.role, id = %user.id, "user registered");
        self.record(AuditEntry::registered(&user));

        Ok(user)
    }

    /// Log in, replacing any current user
    ///
    /// On failure the previous session state is kept.
    pub fn login(&mut self, username: &str, password: &str) -> MeterResult<&User> {
        let user = match self.users.authenticate(username, password) {
            Ok(user) => user,
            Err(e) => {
                debug!(username, "authentication failed");
                return Err(e);
            }
        };

        info!(username = %user.username, "user authenticated");
        self.record(AuditEntry::authenticated(&user));

        Ok(self.current_user.insert(user))
    }

    /// Forget the current user
    pub fn logout(&mut self) -> Option<User> {
        let user = self.current_user.take();
        if let Some(user) = &user {
            info!(username = %user.username, "user logged out");
        }
        user
    }

    /// Submit a monthly reading for the current user
    pub fn submit_reading(
        &mut self,
        counter_type: CounterType,
        month: Month,
        value: i64,
    ) -> MeterResult<()> {
        let user = self.require_user()?;
        self.counters
            .submit_reading(user, counter_type, month, value)?;

        info!(
            username = %user.username,
            counter = %counter_type,
            month = %month,
            value,
            "reading submitted"
        );
        self.record(AuditEntry::reading_submitted(user, counter_type, month, value));

        Ok(())
    }

    /// Latest reading of one counter for the current user
    pub fn latest_reading(&self, counter_type: CounterType) -> MeterResult<i64> {
        let user = self.require_user()?;
        self.counters.latest_reading(user, counter_type)
    }

    /// Latest reading of every counter for the current user
    pub fn latest_readings(&self) -> MeterResult<Vec<(CounterType, i64)>> {
        let user = self.require_user()?;
        self.counters.latest_readings(user)
    }

    /// Reading history of one counter for the current user
    pub fn history(&self, counter_type: CounterType) -> MeterResult<BTreeMap<Month, i64>> {
        let user = self.require_user()?;
        self.counters.history(user, counter_type)
    }

    /// Entries from the audit trail, optionally only the most recent `limit`
    pub fn audit_log(&self, limit: Option<usize>) -> MeterResult<Vec<AuditEntry>> {
        match limit {
            Some(count) => self.audit.recent(count),
            None => self.audit.entries(),
        }
    }
}
