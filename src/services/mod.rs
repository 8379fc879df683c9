//! Service layer for meterbook
//!
//! The service layer provides business logic on top of the storage layer:
//! credential handling for users and per-counter routing for readings.

pub mod counter;
pub mod user;

pub use counter::CounterService;
pub use user::UserService;
