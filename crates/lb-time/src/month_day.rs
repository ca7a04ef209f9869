//! `MonthDay` — the 4-digit month-day key (`MMDD`).
//!
//! Solar-term, festival, and holiday tables are all indexed by a month and
//! day independent of the year. The key renders and parses as a zero-padded
//! 4-digit string such as `"0505"`, which is also its serde representation.

use std::fmt;
use std::str::FromStr;

use lb_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// A month/day pair used as a year-independent table key.
///
/// The month is `1..=12` and the day `1..=31`. The pair is not checked
/// against a particular year, so `0229` and lunar `1230` are both valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a key, validating the month and day ranges.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidArgument(format!(
                "day {day} out of range [1, 31]"
            )));
        }
        Ok(Self { month, day })
    }

    /// Create a key from components already known to be valid.
    pub(crate) fn new_unchecked(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse(format!(
                "month-day key {s:?} is not four digits"
            )));
        }
        let month = s[..2].parse::<u8>().map_err(|e| Error::Parse(e.to_string()))?;
        let day = s[2..].parse::<u8>().map_err(|e| Error::Parse(e.to_string()))?;
        Self::new(month, day).map_err(|e| Error::Parse(format!("{s:?}: {e}")))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(md: MonthDay) -> String {
        md.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_padded() {
        assert_eq!(MonthDay::new(5, 5).unwrap().to_string(), "0505");
        assert_eq!(MonthDay::new(12, 30).unwrap().to_string(), "1230");
    }

    #[test]
    fn parses_four_digits() {
        let md: MonthDay = "0101".parse().unwrap();
        assert_eq!((md.month(), md.day()), (1, 1));
        assert!("101".parse::<MonthDay>().is_err());
        assert!("01-1".parse::<MonthDay>().is_err());
        assert!("1301".parse::<MonthDay>().is_err());
        assert!("0100".parse::<MonthDay>().is_err());
    }

    #[test]
    fn serde_uses_the_string_form() {
        let md = MonthDay::new(10, 1).unwrap();
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"1001\"");
        let back: MonthDay = serde_json::from_str("\"1001\"").unwrap();
        assert_eq!(back, md);
        assert!(serde_json::from_str::<MonthDay>("\"10/1\"").is_err());
    }

    #[test]
    fn ordering_follows_the_calendar() {
        let a = MonthDay::new(1, 31).unwrap();
        let b = MonthDay::new(2, 1).unwrap();
        assert!(a < b);
    }
}
