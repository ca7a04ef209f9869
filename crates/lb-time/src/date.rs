//! `SolarDate` — a Gregorian calendar day.
//!
//! A date is a day number counted from **December 31, 1899**, so serial 1 is
//! January 1, 1900. Differences between serials are exact day counts and
//! time-of-day never enters the picture. Calendar arithmetic is delegated to
//! chrono's proleptic Gregorian day count.
//!
//! # Serial number convention
//! * Serial 0 is the "null date" sentinel.
//! * The valid range is 1900-01-01 (serial 1) to 2199-12-31.

use chrono::{Datelike, NaiveDate, TimeZone};
use lb_core::errors::{Error, Result};

use crate::month_day::MonthDay;
use crate::weekday::Weekday;

/// chrono's day count (`num_days_from_ce`) of the day before serial 1.
const CE_OFFSET: i32 = 693_595;

const FIRST_YEAR: u16 = 1900;
const LAST_YEAR: u16 = 2199;

/// A Gregorian calendar day at day granularity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SolarDate(i32);

impl SolarDate {
    /// The null date sentinel (serial 0).
    pub const NULL: SolarDate = SolarDate(0);

    /// January 1, 1900.
    pub const MIN: SolarDate = SolarDate(1);

    /// December 31, 2199.
    pub const MAX: SolarDate = SolarDate(109_573);

    /// Create a date from a serial number in `MIN..=MAX`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(SolarDate(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} outside [{FIRST_YEAR}, {LAST_YEAR}]"
            )));
        }
        let naive = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .ok_or_else(|| Error::Date(format!("no such day {year}-{month:02}-{day:02}")))?;
        Ok(SolarDate(naive.num_days_from_ce() - CE_OFFSET))
    }

    /// Create a date from a chrono calendar date.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self> {
        Self::from_serial(date.num_days_from_ce() - CE_OFFSET)
    }

    /// Create a date from an instant, keeping only the calendar day it falls
    /// on in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(instant: &chrono::DateTime<Tz>) -> Result<Self> {
        Self::from_naive_date(instant.date_naive())
    }

    /// The serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// `true` for the null sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let n = self.naive();
        (n.year() as u16, n.month() as u8, n.day() as u8)
    }

    /// Year (1900–2199).
    pub fn year(&self) -> u16 {
        self.naive().year() as u16
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.naive().month() as u8
    }

    /// Day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.naive().day() as u8
    }

    /// Return the solar month-day key (e.g. `"0501"` for May 1).
    pub fn month_day(&self) -> MonthDay {
        let (_, m, d) = self.ymd();
        MonthDay::new_unchecked(m, d)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        let n = self.naive().weekday().number_from_monday() as u8;
        Weekday::from_ordinal(n).unwrap_or(Weekday::Monday)
    }

    /// Convert to a chrono calendar date; `None` for the null date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        (!self.is_null()).then(|| self.naive())
    }

    /// Format as a medium-length Chinese date, e.g. `"2024年3月1日"`.
    pub fn to_chinese_string(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y}年{m}月{d}日")
    }

    /// Advance by `n` days, failing if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
            .and_then(Self::from_serial)
    }

    /// Signed day count from `self` to `other`; positive if `other` is later.
    pub fn days_between(self, other: SolarDate) -> i32 {
        other.0 - self.0
    }

    /// First day of this date's month.
    pub fn start_of_month(self) -> Self {
        self.with_day(1)
    }

    /// Last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        self.with_day(days_in_month(y, m))
    }

    /// Return `true` if both dates fall in the same month of the same year.
    pub fn is_same_month(self, other: SolarDate) -> bool {
        let (y1, m1, _) = self.ymd();
        let (y2, m2, _) = other.ymd();
        (y1, m1) == (y2, m2)
    }

    fn with_day(self, day: u8) -> Self {
        let (_, _, d) = self.ymd();
        SolarDate(self.0 - i32::from(d) + i32::from(day))
    }

    fn naive(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0 + CE_OFFSET).unwrap_or_default()
    }
}

impl std::ops::Sub<SolarDate> for SolarDate {
    type Output = i32;
    fn sub(self, rhs: SolarDate) -> i32 {
        rhs.days_between(self)
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_naive_date() {
            Some(n) => write!(f, "{}", n.format("%Y-%m-%d")),
            None => f.write_str("null date"),
        }
    }
}

impl std::fmt::Debug for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolarDate({self})")
    }
}

impl TryFrom<NaiveDate> for SolarDate {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_naive_date(date)
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    NaiveDate::from_ymd_opt(year.into(), 2, 29).is_some()
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => 0,
    }
}
