//! # lb-lunar
//!
//! The Chinese lunisolar calendar: solar ↔ lunar conversion, the 24 solar
//! terms, fixed-date festivals, and Chinese names for lunar dates.
//!
//! ```
//! use lb_lunar::{LunarSolarConverter, fmt};
//! use lb_time::SolarDate;
//!
//! let converter = LunarSolarConverter::new();
//! let lunar = converter.to_lunar(SolarDate::from_ymd(2024, 2, 10).unwrap()).unwrap();
//! assert_eq!((lunar.year(), lunar.month(), lunar.day()), (2024, 1, 1));
//! assert_eq!(fmt::lunar_date_string(&lunar).unwrap(), "2024甲辰年正月初一");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Solar longitude and ΔT.
pub mod astronomy;

/// Table-driven solar ↔ lunar conversion.
pub mod converter;

/// Fixed lunar festivals.
pub mod festivals;

/// Chinese month, day, and year names.
pub mod fmt;

/// `LunarDate` type.
pub mod lunar_date;

/// Solar terms and their per-year cache.
pub mod solar_terms;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use converter::{LunarSolarConverter, FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR};
pub use festivals::{Festival, FestivalTable};
pub use lunar_date::LunarDate;
pub use solar_terms::{LunarYearInfo, SolarTerm, SolarTermCache, SolarTermSource};
