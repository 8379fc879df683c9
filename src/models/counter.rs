//! Counter type model
//!
//! The closed set of utility meters a reading can be submitted for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MeterError;

/// Kind of utility meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterType {
    /// Heating meter
    Heating,
    /// Hot water meter
    HotWater,
    /// Cold water meter
    ColdWater,
}

impl CounterType {
    /// All counter types in display order
    pub const ALL: [CounterType; 3] = [Self::Heating, Self::HotWater, Self::ColdWater];

    /// Parse a counter type from user input
    ///
    /// Case-insensitive; `-`, `_` and spaces are interchangeable or may be
    /// omitted (`hot-water`, `HOT_WATER`, `hotwater`).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "heating" => Some(Self::Heating),
            "hotwater" => Some(Self::HotWater),
            "coldwater" => Some(Self::ColdWater),
            _ => None,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heating => "HEATING",
            Self::HotWater => "HOT_WATER",
            Self::ColdWater => "COLD_WATER",
        }
    }
}

impl fmt::Display for CounterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CounterType {
    type Err = MeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| MeterError::invalid_enum("counter type", s.trim()))
    }
}
