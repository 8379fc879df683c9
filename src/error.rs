//! Custom error types for meterbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every core error is recoverable: the
//! presentation layer turns them into user messages.

use thiserror::Error;

use crate::models::{CounterType, Month};

/// The main error type for meterbook operations
#[derive(Error, Debug)]
pub enum MeterError {
    /// Registration with a username that is already taken
    #[error("User '{0}' is already registered")]
    DuplicateUsername(String),

    /// Unknown username or wrong password; never says which
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A string did not match a closed enumeration (role, counter type, month)
    #[error("Invalid {kind}: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A reading for this month has already been submitted
    #[error("{}", already_submitted_message(.counter_type, .month))]
    AlreadySubmitted {
        counter_type: Option<CounterType>,
        month: Month,
    },

    /// A session operation was attempted without a logged-in user
    #[error("Authentication required")]
    NotAuthenticated,

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Password hashing errors
    #[error("Credential error: {0}")]
    Crypto(String),

    /// In-memory store errors (poisoned locks)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

fn already_submitted_message(counter_type: &Option<CounterType>, month: &Month) -> String {
    match counter_type {
        Some(counter_type) => format!(
            "A {} reading for {} has already been submitted",
            counter_type, month
        ),
        None => format!("A reading for {} has already been submitted", month),
    }
}

impl MeterError {
    /// Create an "invalid value" error for a closed enumeration
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Check if this error is an expected business outcome rather than an
    /// infrastructure failure
    pub fn is_business_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername(_)
                | Self::InvalidCredentials
                | Self::InvalidEnumValue { .. }
                | Self::AlreadySubmitted { .. }
                | Self::NotAuthenticated
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for MeterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MeterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for meterbook operations
pub type MeterResult<T> = Result<T, MeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_enum_error() {
        let err = MeterError::invalid_enum("counter type", "GAS");
        assert_eq!(err.to_string(), "Invalid counter type: 'GAS'");
        assert!(err.is_business_error());
    }

    #[test]
    fn test_already_submitted_error() {
        let err = MeterError::AlreadySubmitted {
            counter_type: Some(CounterType::HotWater),
            month: Month::April,
        };
        assert_eq!(
            err.to_string(),
            "A HOT_WATER reading for APRIL has already been submitted"
        );
        assert!(err.is_business_error());

        let bare = MeterError::AlreadySubmitted {
            counter_type: None,
            month: Month::March,
        };
        assert_eq!(
            bare.to_string(),
            "A reading for MARCH has already been submitted"
        );
    }

    #[test]
    fn test_credentials_error_is_opaque() {
        let err = MeterError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let meter_err: MeterError = io_err.into();
        assert!(matches!(meter_err, MeterError::Io(_)));
        assert!(!meter_err.is_business_error());
    }
}
