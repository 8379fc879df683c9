//! Counter service
//!
//! Routes per-user, per-counter-type operations to the right ledger.

use std::collections::BTreeMap;

use crate::error::MeterResult;
use crate::models::{CounterType, Month, User};
use crate::storage::Storage;

/// Service for meter readings
pub struct CounterService<'a> {
    storage: &'a Storage,
}

impl<'a> CounterService<'a> {
    /// Create a new counter service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Submit a monthly reading
    ///
    /// Fails with `AlreadySubmitted` if the month already holds a non-zero
    /// reading for this counter; the stored value is left unchanged.
    pub fn submit_reading(
        &self,
        user: &User,
        counter_type: CounterType,
        month: Month,
        value: i64,
    ) -> MeterResult<()> {
        self.storage
            .readings
            .submit(user.id, counter_type, month, value)
    }

    /// Latest reading for a counter, 0 if nothing was ever submitted
    pub fn latest_reading(&self, user: &User, counter_type: CounterType) -> MeterResult<i64> {
        Ok(self
            .storage
            .readings
            .latest(user.id, counter_type)?
            .unwrap_or(0))
    }

    /// Latest reading of every counter type, in `CounterType::ALL` order
    pub fn latest_readings(&self, user: &User) -> MeterResult<Vec<(CounterType, i64)>> {
        CounterType::ALL
            .iter()
            .map(|&counter_type| Ok((counter_type, self.latest_reading(user, counter_type)?)))
            .collect()
    }

    /// All readings for a counter, ordered by month
    pub fn history(
        &self,
        user: &User,
        counter_type: CounterType,
    ) -> MeterResult<BTreeMap<Month, i64>> {
        Ok(self
            .storage
            .readings
            .history(user.id, counter_type)?
            .unwrap_or_default())
    }

    /// Stored value for one month, 0 if absent
    pub fn value_for(
        &self,
        user: &User,
        counter_type: CounterType,
        month: Month,
    ) -> MeterResult<i64> {
        Ok(self
            .storage
            .readings
            .value_for(user.id, counter_type, month)?
            .unwrap_or(0))
    }
}
