//! Solar ⇄ lunar date conversion.
//!
//! The conversion is table-driven. Each lunar year from 1900 to 2100 is
//! packed into one word:
//!
//! * bits 0–3: the month followed by a leap month (0 = no leap month);
//! * bits 4–15: month lengths, bit `0x10000 >> m` set when month `m` has
//!   30 days instead of 29;
//! * bit 16: set when the leap month has 30 days.
//!
//! Lunar 1900-01-01 is solar 1900-01-31. The last supported day is the eve
//! of lunar year 2101, solar 2101-01-28.

use lb_core::errors::{Error, Result};
use lb_core::fail;
use lb_time::SolarDate;

use crate::lunar_date::LunarDate;

/// First lunar year covered by the tables.
pub const FIRST_LUNAR_YEAR: i32 = 1900;

/// Last lunar year covered by the tables.
pub const LAST_LUNAR_YEAR: i32 = 2100;

const YEAR_COUNT: usize = (LAST_LUNAR_YEAR - FIRST_LUNAR_YEAR + 1) as usize;

/// Serial of solar 1900-01-31, the first day of lunar year 1900.
const EPOCH_SERIAL: i32 = 31;

#[rustfmt::skip]
const LUNAR_INFO: [u32; YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

const fn leap_month_bits(info: u32) -> u8 {
    (info & 0xf) as u8
}

const fn month_len_bits(info: u32, month: u8) -> i32 {
    if info & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

const fn leap_len_bits(info: u32) -> i32 {
    if leap_month_bits(info) == 0 {
        0
    } else if info & 0x10000 != 0 {
        30
    } else {
        29
    }
}

const fn year_len_bits(info: u32) -> i32 {
    let mut total = leap_len_bits(info);
    let mut m = 1;
    while m <= 12 {
        total += month_len_bits(info, m);
        m += 1;
    }
    total
}

const fn year_starts() -> [i32; YEAR_COUNT + 1] {
    let mut starts = [0; YEAR_COUNT + 1];
    starts[0] = EPOCH_SERIAL;
    let mut i = 0;
    while i < YEAR_COUNT {
        starts[i + 1] = starts[i] + year_len_bits(LUNAR_INFO[i]);
        i += 1;
    }
    starts
}

/// Serial of the first day of each lunar year, plus one past the end.
const YEAR_STARTS: [i32; YEAR_COUNT + 1] = year_starts();

fn year_index(year: i32) -> Result<usize> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        fail!("lunar year {year}");
    }
    Ok((year - FIRST_LUNAR_YEAR) as usize)
}

/// Converts between solar dates and their lunar-calendar identity.
///
/// Stateless; every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarSolarConverter;

impl LunarSolarConverter {
    /// Create a converter.
    pub fn new() -> Self {
        Self
    }

    /// Return the first and last solar dates the converter accepts.
    pub fn supported_range(&self) -> (SolarDate, SolarDate) {
        // Both serials lie well inside 1900..=2199.
        (
            SolarDate::from_serial(YEAR_STARTS[0]).unwrap_or(SolarDate::MIN),
            SolarDate::from_serial(YEAR_STARTS[YEAR_COUNT] - 1).unwrap_or(SolarDate::MAX),
        )
    }

    /// Convert a solar date to its lunar date.
    ///
    /// # Errors
    /// [`Error::Conversion`] if `date` lies before solar 1900-01-31 or after
    /// solar 2101-01-28.
    pub fn to_lunar(&self, date: SolarDate) -> Result<LunarDate> {
        let serial = date.serial();
        if date.is_null() || serial < YEAR_STARTS[0] || serial >= YEAR_STARTS[YEAR_COUNT] {
            fail!("{date}");
        }
        let idx = YEAR_STARTS.partition_point(|&start| start <= serial) - 1;
        let info = LUNAR_INFO[idx];
        let leap = leap_month_bits(info);
        let mut offset = serial - YEAR_STARTS[idx];
        let year = FIRST_LUNAR_YEAR + idx as i32;

        for month in 1..=12u8 {
            let len = month_len_bits(info, month);
            if offset < len {
                return Ok(LunarDate::new_unchecked(year, month, offset as u8 + 1, false));
            }
            offset -= len;
            if leap == month {
                let len = leap_len_bits(info);
                if offset < len {
                    return Ok(LunarDate::new_unchecked(year, month, offset as u8 + 1, true));
                }
                offset -= len;
            }
        }
        Err(Error::MissingComponent(format!(
            "{date} overruns lunar year {year}"
        )))
    }

    /// Convert a lunar date back to its solar date.
    ///
    /// # Errors
    /// [`Error::Conversion`] for years outside 1900–2100;
    /// [`Error::InvalidArgument`] for months or days that do not exist in
    /// that lunar year.
    pub fn to_solar(&self, lunar: LunarDate) -> Result<SolarDate> {
        let idx = year_index(lunar.year())?;
        let info = LUNAR_INFO[idx];
        let (month, day) = (lunar.month(), lunar.day());
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!("lunar month {month}")));
        }
        if lunar.is_leap_month() && leap_month_bits(info) != month {
            return Err(Error::InvalidArgument(format!(
                "lunar year {} has no leap month {month}",
                lunar.year()
            )));
        }
        let len = self.month_length(lunar.year(), month, lunar.is_leap_month())?;
        if day == 0 || day as i32 > len {
            return Err(Error::InvalidArgument(format!(
                "lunar day {day} out of range [1, {len}]"
            )));
        }

        let mut serial = YEAR_STARTS[idx];
        for m in 1..month {
            serial += month_len_bits(info, m);
            if leap_month_bits(info) == m {
                serial += leap_len_bits(info);
            }
        }
        if lunar.is_leap_month() {
            serial += month_len_bits(info, month);
        }
        SolarDate::from_serial(serial + day as i32 - 1)
    }

    /// Return the solar date of the first day of lunar year `year`.
    pub fn first_day_of_lunar_year(&self, year: i32) -> Result<SolarDate> {
        let idx = year_index(year)?;
        SolarDate::from_serial(YEAR_STARTS[idx])
    }

    /// Return the first and last solar dates of lunar year `year`.
    pub fn lunar_year_span(&self, year: i32) -> Result<(SolarDate, SolarDate)> {
        let idx = year_index(year)?;
        Ok((
            SolarDate::from_serial(YEAR_STARTS[idx])?,
            SolarDate::from_serial(YEAR_STARTS[idx + 1] - 1)?,
        ))
    }

    /// Return the solar date of New Year's Eve for the lunar year containing
    /// `date`, i.e. the last day of that lunar year.
    pub fn last_day_of_lunar_year(&self, date: SolarDate) -> Result<SolarDate> {
        let year = self.to_lunar(date)?.year();
        Ok(self.lunar_year_span(year)?.1)
    }

    /// Return `true` if `date` falls in a leap (intercalary) month.
    pub fn is_leap_month(&self, date: SolarDate) -> Result<bool> {
        Ok(self.to_lunar(date)?.is_leap_month())
    }

    /// Return the leap month of lunar year `year`, if it has one.
    pub fn leap_month_of(&self, year: i32) -> Result<Option<u8>> {
        let info = LUNAR_INFO[year_index(year)?];
        Ok(match leap_month_bits(info) {
            0 => None,
            m => Some(m),
        })
    }

    /// Return the number of days (29 or 30) in a lunar month.
    pub fn month_length(&self, year: i32, month: u8, is_leap: bool) -> Result<i32> {
        let info = LUNAR_INFO[year_index(year)?];
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!("lunar month {month}")));
        }
        if is_leap {
            if leap_month_bits(info) != month {
                return Err(Error::InvalidArgument(format!(
                    "lunar year {year} has no leap month {month}"
                )));
            }
            return Ok(leap_len_bits(info));
        }
        Ok(month_len_bits(info, month))
    }

    /// Return the number of days in lunar year `year`.
    pub fn year_length(&self, year: i32) -> Result<i32> {
        Ok(year_len_bits(LUNAR_INFO[year_index(year)?]))
    }

    /// Signed number of days from `a` to `b` (positive when `b` is later).
    ///
    /// # Errors
    /// [`Error::Date`] if either date is the null sentinel.
    pub fn days_between(&self, a: SolarDate, b: SolarDate) -> Result<i32> {
        if a.is_null() || b.is_null() {
            return Err(Error::Date("cannot count days from a null date".into()));
        }
        Ok(a.days_between(b))
    }
}
