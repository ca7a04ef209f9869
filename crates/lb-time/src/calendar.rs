//! `Calendar` trait — business-day classification.
//!
//! A calendar knows which dates are working days. The statutory calendar in
//! `lb-holidays` layers government workday/holiday adjustments on top of the
//! plain Saturday/Sunday weekend of [`WeekendsOnly`].

use lb_core::errors::Result;

use crate::date::SolarDate;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"China (statutory)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: SolarDate) -> bool;

    /// Return `true` if `date` is a day off.
    fn is_holiday(&self, date: SolarDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: SolarDate) -> bool {
        date.weekday().is_weekend()
    }

    /// Return the first working day on or after `date`.
    fn next_business_day(&self, mut date: SolarDate) -> Result<SolarDate> {
        while self.is_holiday(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// Advance `date` by `n` working days.
    fn advance_business_days(&self, mut date: SolarDate, n: i32) -> Result<SolarDate> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of working days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: SolarDate, d2: SolarDate) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| SolarDate::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }
}

/// A calendar that treats only Saturdays and Sundays as days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: SolarDate) -> bool {
        !self.is_weekend(date)
    }
}
