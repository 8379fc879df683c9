//! Configuration module for meterbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (audit and password hashing preferences)

pub mod paths;
pub mod settings;

pub use paths::MeterPaths;
pub use settings::{AuditSettings, Settings};
