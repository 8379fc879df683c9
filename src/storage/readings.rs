//! Reading repository
//!
//! Owns every ledger, keyed by user and counter type. Ledgers are created
//! on first submission.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::error::{MeterError, MeterResult};
use crate::models::{CounterType, Month, ReadingLedger, UserId};

use super::{read_poisoned, write_poisoned};

/// Repository for monthly meter readings
#[derive(Default)]
pub struct ReadingRepository {
    data: RwLock<HashMap<UserId, HashMap<CounterType, ReadingLedger>>>,
}

impl ReadingRepository {
    /// Create an empty reading repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a reading, creating the ledger if needed
    pub fn submit(
        &self,
        user_id: UserId,
        counter_type: CounterType,
        month: Month,
        value: i64,
    ) -> MeterResult<()> {
        let mut data = self.data.write().map_err(write_poisoned)?;

        data.entry(user_id)
            .or_default()
            .entry(counter_type)
            .or_default()
            .submit(month, value)
            .map_err(|e| match e {
                MeterError::AlreadySubmitted { month, .. } => MeterError::AlreadySubmitted {
                    counter_type: Some(counter_type),
                    month,
                },
                other => other,
            })
    }

    /// Run a read-only closure against a ledger, if it exists
    fn with_ledger<T>(
        &self,
        user_id: UserId,
        counter_type: CounterType,
        f: impl FnOnce(&ReadingLedger) -> T,
    ) -> MeterResult<Option<T>> {
        let data = self.data.read().map_err(read_poisoned)?;

        Ok(data
            .get(&user_id)
            .and_then(|ledgers| ledgers.get(&counter_type))
            .map(f))
    }

    /// Latest reading, or `None` when no ledger exists yet
    pub fn latest(&self, user_id: UserId, counter_type: CounterType) -> MeterResult<Option<i64>> {
        self.with_ledger(user_id, counter_type, ReadingLedger::latest)
    }

    /// History copy, or `None` when no ledger exists yet
    pub fn history(
        &self,
        user_id: UserId,
        counter_type: CounterType,
    ) -> MeterResult<Option<BTreeMap<Month, i64>>> {
        self.with_ledger(user_id, counter_type, ReadingLedger::history)
    }

    /// Stored value for a month, or `None` when no ledger exists yet
    pub fn value_for(
        &self,
        user_id: UserId,
        counter_type: CounterType,
        month: Month,
    ) -> MeterResult<Option<i64>> {
        self.with_ledger(user_id, counter_type, |ledger| ledger.value_for(month))
    }

    /// Number of ledgers created so far
    pub fn ledger_count(&self) -> MeterResult<usize> {
        let data = self.data.read().map_err(read_poisoned)?;
        Ok(data.values().map(HashMap::len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ledger() {
        let repo = ReadingRepository::new();
        let user = UserId::new();

        assert_eq!(repo.latest(user, CounterType::Heating).unwrap(), None);
        assert_eq!(repo.history(user, CounterType::Heating).unwrap(), None);
        assert_eq!(repo.ledger_count().unwrap(), 0);
    }

    #[test]
    fn test_ledger_created_lazily() {
        let repo = ReadingRepository::new();
        let user = UserId::new();

        repo.submit(user, CounterType::Heating, Month::May, 10).unwrap();

        assert_eq!(repo.ledger_count().unwrap(), 1);
        assert_eq!(repo.latest(user, CounterType::Heating).unwrap(), Some(10));
        assert_eq!(repo.latest(user, CounterType::ColdWater).unwrap(), None);
    }

    #[test]
    fn test_duplicate_carries_counter_type() {
        let repo = ReadingRepository::new();
        let user = UserId::new();

        repo.submit(user, CounterType::HotWater, Month::April, 100).unwrap();
        let err = repo
            .submit(user, CounterType::HotWater, Month::April, 200)
            .unwrap_err();

        assert!(matches!(
            err,
            MeterError::AlreadySubmitted {
                counter_type: Some(CounterType::HotWater),
                month: Month::April,
            }
        ));
    }

    #[test]
    fn test_users_are_isolated() {
        let repo = ReadingRepository::new();
        let alice = UserId::new();
        let bob = UserId::new();

        repo.submit(alice, CounterType::Heating, Month::May, 10).unwrap();
        repo.submit(bob, CounterType::Heating, Month::May, 20).unwrap();

        assert_eq!(
            repo.value_for(alice, CounterType::Heating, Month::May).unwrap(),
            Some(10)
        );
        assert_eq!(
            repo.value_for(bob, CounterType::Heating, Month::May).unwrap(),
            Some(20)
        );
    }
}
