//! Month period representation
//!
//! Budgets and spending aggregation are scoped to calendar months, identified
//! by their "YYYY-MM" form both in the UI and in the persisted data.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g. "2024-05")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::OutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month
    pub fn current() -> Self {
        Self::of(Utc::now().date_naive())
    }

    /// Check whether a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(m: Month) -> Self {
        m.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    OutOfRange(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            MonthParseError::OutOfRange(m) => write!(f, "Month number out of range: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2024, 5).unwrap().to_string(), "2024-05");
        assert_eq!(Month::new(2024, 12).unwrap().to_string(), "2024-12");
    }

    #[test]
    fn test_parse() {
        let m: Month = "2024-05".parse().unwrap();
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 5);

        assert!("2024".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("2024-00".parse::<Month>().is_err());
        assert!("may-2024".parse::<Month>().is_err());
    }

    #[test]
    fn test_contains() {
        let m: Month = "2024-05".parse().unwrap();
        assert!(m.contains(date(2024, 5, 1)));
        assert!(m.contains(date(2024, 5, 31)));
        assert!(!m.contains(date(2024, 6, 1)));
        assert!(!m.contains(date(2023, 5, 15)));
    }

    #[test]
    fn test_of_date() {
        assert_eq!(Month::of(date(2024, 5, 17)), Month::new(2024, 5).unwrap());
    }

    #[test]
    fn test_serialization() {
        let m = Month::new(2024, 5).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2024-05\"");

        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
