//! Calendar month used as the reading period key
//!
//! Months are ordered by ordinal (January = 1 .. December = 12); the
//! derived `Ord` follows declaration order, which is what "latest reading"
//! relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MeterError;

/// One of the twelve calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Get the month for an ordinal in 1..=12
    pub fn from_number(number: u32) -> Result<Self, MeterError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or_else(|| MeterError::invalid_enum("month", number.to_string()))
    }

    /// Ordinal of this month (January = 1)
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Upper-case English name
    pub fn name(&self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MeterError;

    /// Accepts an ordinal (`4`) or an English name, full or abbreviated
    /// to three letters (`april`, `Apr`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number);
        }

        let upper = trimmed.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|month| {
                let name = month.name();
                upper == name || (upper.len() == 3 && name.starts_with(&upper))
            })
            .ok_or_else(|| MeterError::invalid_enum("month", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Month::from_number(1).unwrap(), Month::January);
        assert_eq!(Month::from_number(4).unwrap(), Month::April);
        assert_eq!(Month::from_number(12).unwrap(), Month::December);
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert!(matches!(
            Month::from_number(0),
            Err(MeterError::InvalidEnumValue { kind: "month", .. })
        ));
        assert!(Month::from_number(13).is_err());
    }

    #[test]
    fn test_number_matches_position() {
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number() as usize, index + 1);
        }
    }

    #[test]
    fn test_ordering_follows_calendar() {
        assert!(Month::March < Month::June);
        assert!(Month::December > Month::January);
        assert_eq!(Month::ALL.iter().max(), Some(&Month::December));
    }

    #[test]
    fn test_parse_names_and_numbers() {
        assert_eq!("6".parse::<Month>().unwrap(), Month::June);
        assert_eq!("june".parse::<Month>().unwrap(), Month::June);
        assert_eq!("Sep".parse::<Month>().unwrap(), Month::September);
        assert_eq!(" DECEMBER ".parse::<Month>().unwrap(), Month::December);
        assert!("Juno".parse::<Month>().is_err());
        assert!("Ju".parse::<Month>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::April.to_string(), "APRIL");
    }
}
