//! # lunarbar
//!
//! The annotation core of a menu-bar calendar: Chinese lunar dates, solar
//! terms, traditional festivals, statutory holiday adjustments, and the
//! days-between counter.
//!
//! This crate is a **façade** that re-exports the `lb-*` workspace crates.
//! Application code should depend on this crate rather than the individual
//! crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use lunarbar::annotate::{CellAnnotator, DayCounter, Event, Phrases};
//! use lunarbar::time::{FixedClock, SolarDate};
//!
//! let today = SolarDate::from_ymd(2024, 9, 10).unwrap();
//! let annotator = CellAnnotator::builder()
//!     .with_clock(Arc::new(FixedClock(today)))
//!     .build()
//!     .unwrap();
//!
//! let mid_autumn = SolarDate::from_ymd(2024, 9, 17).unwrap();
//! let cell = annotator.annotate_cell::<Event>(mid_autumn, &[], Some(today)).unwrap();
//! assert_eq!(cell.lunar_label, "中秋节");
//! assert_eq!(cell.main_info, "[休]甲辰年八月十五（7天后）");
//!
//! let mut counter = DayCounter::new();
//! counter.pick(today);
//! let span = counter.pick(mid_autumn).unwrap();
//! assert_eq!(span.message(&Phrases::default()), "2024年9月10日与2024年9月17日相隔7天");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors and settings.
pub use lb_core as core;

/// Solar dates, weekdays, `MMDD` keys, clocks, and working-day calendars.
pub use lb_time as time;

/// Lunar conversion, solar terms, and festivals.
pub use lb_lunar as lunar;

/// Statutory holiday adjustments.
pub use lb_holidays as holidays;

/// Cell annotation, the day counter, and status-bar text.
pub use lb_annotate as annotate;
