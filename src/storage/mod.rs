//! Storage layer for meterbook
//!
//! In-memory repositories for users and meter readings. Nothing here is
//! persisted; each repository guards its maps with a single lock.

pub mod readings;
pub mod users;

pub use readings::ReadingRepository;
pub use users::UserRepository;

use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

use crate::error::MeterError;

/// Main storage coordinator that provides access to all repositories
#[derive(Default)]
pub struct Storage {
    pub users: UserRepository,
    pub readings: ReadingRepository,
}

impl Storage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn read_poisoned<T>(e: PoisonError<RwLockReadGuard<'_, T>>) -> MeterError {
    MeterError::Storage(format!("Failed to acquire read lock: {}", e))
}

pub(crate) fn write_poisoned<T>(e: PoisonError<RwLockWriteGuard<'_, T>>) -> MeterError {
    MeterError::Storage(format!("Failed to acquire write lock: {}", e))
}
