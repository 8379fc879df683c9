//! meterbook - Terminal-based utility meter reading journal
//!
//! This library provides the core functionality for meterbook: users
//! register and log in, then submit one reading per month for each of their
//! heating, hot water and cold water meters and look at the latest value or
//! the monthly history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (users, counter types, months, ledgers)
//! - `crypto`: Password hashing
//! - `storage`: In-memory repositories
//! - `services`: Business logic layer
//! - `audit`: Audit trail
//! - `display`: Terminal formatting
//! - `cli`: Interactive session and menu
//!
//! # Example
//!
//! ```rust,ignore
//! use meterbook::audit::MemoryAuditLog;
//! use meterbook::cli::Session;
//! use meterbook::crypto::HashingParams;
//! use meterbook::models::{CounterType, Month, Role};
//! use meterbook::storage::Storage;
//!
//! let storage = Storage::new();
//! let audit = MemoryAuditLog::new();
//! let mut session = Session::new(&storage, HashingParams::default(), &audit);
//!
//! session.register("alice", "s3cret", Role::User)?;
//! session.login("alice", "s3cret")?;
//! session.submit_reading(CounterType::HotWater, Month::April, 100)?;
//! assert_eq!(session.latest_reading(CounterType::HotWater)?, 100);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MeterError, MeterResult};
