//! Reading ledger model
//!
//! Monthly readings of one counter type for one user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::month::Month;
use crate::error::{MeterError, MeterResult};

/// Monthly readings for a single (user, counter type) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingLedger {
    readings: BTreeMap<Month, i64>,
}

impl ReadingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the reading for a month
    ///
    /// Fails with `AlreadySubmitted` when the month already holds a non-zero
    /// value. A stored zero counts as "not submitted", so a zero reading can
    /// be overwritten later. Any value is accepted, including zero and
    /// negatives.
    pub fn submit(&mut self, month: Month, value: i64) -> MeterResult<()> {
        if self.value_for(month) != 0 {
            return Err(MeterError::AlreadySubmitted {
                counter_type: None,
                month,
            });
        }

        self.readings.insert(month, value);
        Ok(())
    }

    /// Stored value for a month, or 0 when nothing was submitted
    pub fn value_for(&self, month: Month) -> i64 {
        self.readings.get(&month).copied().unwrap_or(0)
    }

    /// Copy of all entries, ordered by month
    pub fn history(&self) -> BTreeMap<Month, i64> {
        self.readings.clone()
    }

    /// Value for the latest month with an entry
    ///
    /// An empty ledger reports the January value, which is 0.
    pub fn latest(&self) -> i64 {
        let latest_month = self
            .readings
            .keys()
            .next_back()
            .copied()
            .unwrap_or(Month::January);
        self.value_for(latest_month)
    }

    /// Number of months with an entry
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether no month has an entry
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
