//! # lb-holidays
//!
//! Government workday/holiday adjustments keyed by `(year, MMDD)`.
//!
//! ```
//! use lb_holidays::{HolidayManager, HolidayType};
//!
//! let holidays = HolidayManager::with_default_data().unwrap();
//! assert_eq!(holidays.type_of(2024, "0210".parse().unwrap()), HolidayType::Holiday);
//! assert_eq!(holidays.type_of(2024, "0218".parse().unwrap()), HolidayType::Workday);
//! assert_eq!(holidays.type_of(2024, "0301".parse().unwrap()), HolidayType::None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Dataset schema and the bundled data.
pub mod dataset;

/// The merged, refreshable lookup.
pub mod manager;

/// A `Calendar` over the statutory adjustments.
pub mod statutory;

pub use dataset::{HolidayDataset, HolidayEntry, HolidayType};
pub use manager::{HolidayManager, HolidayTable};
pub use statutory::StatutoryCalendar;
