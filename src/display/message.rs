//! User-facing messages for error outcomes

use crate::error::MeterError;

/// Turn an error into the message shown to the user
pub fn describe_error(err: &MeterError) -> String {
    if !err.is_business_error() {
        return format!("Error: {}", err);
    }

    match err {
        MeterError::DuplicateUsername(username) => format!(
            "User '{}' is already registered. Registration not performed.",
            username
        ),
        MeterError::InvalidCredentials => "Invalid credentials.".to_string(),
        MeterError::InvalidEnumValue { kind, value } => {
            let expected = match *kind {
                "role" => "USER or ADMIN",
                "counter type" => "HEATING, HOT_WATER or COLD_WATER",
                "month" => "a month number 1-12 or a month name",
                _ => "a known value",
            };
            format!("Invalid {} '{}'. Expected {}.", kind, value, expected)
        }
        MeterError::AlreadySubmitted { .. } => format!("{}. Nothing was changed.", err),
        MeterError::NotAuthenticated => "Please log in first.".to_string(),
        MeterError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CounterType, Month};

    #[test]
    fn test_business_messages() {
        assert_eq!(
            describe_error(&MeterError::InvalidCredentials),
            "Invalid credentials."
        );
        assert_eq!(
            describe_error(&MeterError::NotAuthenticated),
            "Please log in first."
        );
        assert_eq!(
            describe_error(&MeterError::invalid_enum("role", "ROOT")),
            "Invalid role 'ROOT'. Expected USER or ADMIN."
        );
    }

    #[test]
    fn test_already_submitted_message() {
        let err = MeterError::AlreadySubmitted {
            counter_type: Some(CounterType::Heating),
            month: Month::May,
        };
        assert_eq!(
            describe_error(&err),
            "A HEATING reading for MAY has already been submitted. Nothing was changed."
        );
    }

    #[test]
    fn test_infrastructure_errors_prefixed() {
        let err = MeterError::Io("disk full".into());
        assert_eq!(describe_error(&err), "Error: I/O error: disk full");
    }
}
