//! # lb-time
//!
//! Gregorian date, weekday, month-day key, clock, and calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day `Calendar` trait.
pub mod calendar;

/// `Clock` — where "today" comes from.
pub mod clock;

/// `SolarDate` type.
pub mod date;

/// `MonthDay` — the 4-digit `MMDD` table key.
pub mod month_day;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::SolarDate;
pub use month_day::MonthDay;
pub use weekday::Weekday;
