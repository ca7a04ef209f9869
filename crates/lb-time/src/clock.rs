//! `Clock` — the source of "now".
//!
//! Services that need today's date take a clock instead of reading the
//! system time directly, so tests can pin the date with [`FixedClock`].

use lb_core::errors::Result;

use crate::date::SolarDate;

/// Something that knows which calendar day it is.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Return the current calendar day.
    fn today(&self) -> Result<SolarDate>;
}

/// Reads the local system time through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<SolarDate> {
        SolarDate::from_datetime(&chrono::Local::now())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub SolarDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<SolarDate> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let d = SolarDate::from_ymd(2024, 2, 10).unwrap();
        let clock = FixedClock(d);
        assert_eq!(clock.today().unwrap(), d);
        assert_eq!(clock.today().unwrap(), d);
    }

    #[test]
    fn system_clock_is_in_range() {
        let today = SystemClock.today().unwrap();
        assert!(today.year() >= 2024);
    }
}
