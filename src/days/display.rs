use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// How much of a period an item shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayOption {
    /// Plain day count, e.g. "5 days".
    #[default]
    Day,
    /// Months and days, years folded into months.
    MonthDay,
    /// Years, months and days.
    YearMonthDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display option: {0:?}")]
pub struct ParseDisplayOptionError(pub String);

impl DisplayOption {
    pub const ALL: [DisplayOption; 3] = [
        DisplayOption::Day,
        DisplayOption::MonthDay,
        DisplayOption::YearMonthDay,
    ];

    /// camelCase name used in stored items and backups.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayOption::Day => "day",
            DisplayOption::MonthDay => "monthDay",
            DisplayOption::YearMonthDay => "yearMonthDay",
        }
    }

    /// Like `from_str`, but anything unrecognized becomes `Day`.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for DisplayOption {
    type Err = ParseDisplayOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(DisplayOption::Day),
            "monthday" | "month_day" => Ok(DisplayOption::MonthDay),
            "yearmonthday" | "year_month_day" => Ok(DisplayOption::YearMonthDay),
            _ => Err(ParseDisplayOptionError(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DisplayOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DisplayOption::parse_or_default(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for option in DisplayOption::ALL {
            assert_eq!(option.as_str().parse::<DisplayOption>(), Ok(option));
        }
    }

    #[test]
    fn unknown_name_falls_back_to_day() {
        assert_eq!(DisplayOption::parse_or_default("weekly"), DisplayOption::Day);
        assert!("weekly".parse::<DisplayOption>().is_err());
    }
}
