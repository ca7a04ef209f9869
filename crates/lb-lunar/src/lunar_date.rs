//! `LunarDate` — a date in the Chinese lunisolar calendar.

use lb_core::errors::{Error, Result};
use lb_time::MonthDay;

/// A lunar year, month (1–12), day (1–30), and leap-month flag.
///
/// Produced by [`LunarSolarConverter::to_lunar`](crate::LunarSolarConverter::to_lunar);
/// a given solar date always maps to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
}

impl LunarDate {
    /// Create a lunar date, checking only the month and day ranges.
    ///
    /// Whether the month exists in `year` (or has 30 days) is checked by
    /// [`LunarSolarConverter::to_solar`](crate::LunarSolarConverter::to_solar).
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "lunar month {month} out of range [1, 12]"
            )));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::InvalidArgument(format!(
                "lunar day {day} out of range [1, 30]"
            )));
        }
        Ok(Self::new_unchecked(year, month, day, is_leap_month))
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    /// Lunar year number (the Gregorian year in which it starts).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Lunar month, 1–12, shared by a leap month and the month before it.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Lunar day, 1–30.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `true` inside an intercalary month.
    pub fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// The lunar `MMDD` key. The leap flag is not part of the key.
    pub fn month_day(&self) -> Result<MonthDay> {
        MonthDay::new(self.month, self.day)
            .map_err(|e| Error::MissingComponent(format!("lunar month-day: {e}")))
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(f, "{}-{:02}{leap}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_components() {
        assert!(LunarDate::new(2024, 0, 1, false).is_err());
        assert!(LunarDate::new(2024, 13, 1, false).is_err());
        assert!(LunarDate::new(2024, 1, 31, false).is_err());
    }

    #[test]
    fn month_day_ignores_leap_flag() {
        let common = LunarDate::new(2020, 4, 15, false).unwrap();
        let leap = LunarDate::new(2020, 4, 15, true).unwrap();
        assert_eq!(common.month_day().unwrap(), leap.month_day().unwrap());
        assert_eq!(leap.month_day().unwrap().to_string(), "0415");
    }

    #[test]
    fn display() {
        assert_eq!(LunarDate::new(2017, 6, 1, true).unwrap().to_string(), "2017-06L-01");
    }
}
