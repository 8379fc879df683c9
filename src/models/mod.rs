//! Core data models for meterbook
//!
//! This module contains the data structures that represent the metering
//! domain: users and their roles, counter types, calendar months, and the
//! per-user, per-counter ledger of monthly readings.

pub mod counter;
pub mod ids;
pub mod ledger;
pub mod month;
pub mod user;

pub use counter::CounterType;
pub use ids::UserId;
pub use ledger::ReadingLedger;
pub use month::Month;
pub use user::{Role, User};
