//! # lb-annotate
//!
//! Date-cell annotation, the days-between counter, and status-bar text.
//!
//! ```
//! use std::sync::Arc;
//! use lb_annotate::{CellAnnotator, events::Event};
//! use lb_time::{FixedClock, SolarDate};
//!
//! let today = SolarDate::from_ymd(2024, 2, 10).unwrap();
//! let annotator = CellAnnotator::builder()
//!     .with_clock(Arc::new(FixedClock(today)))
//!     .build()
//!     .unwrap();
//! let cell = annotator.annotate_cell::<Event>(today, &[], Some(today)).unwrap();
//! assert_eq!(cell.lunar_label, "春节");
//! assert_eq!(cell.main_info, "[休]甲辰年正月初一（今天）");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CellAnnotator` and its output record.
pub mod annotator;

/// The days-between state machine.
pub mod day_counter;

/// Calendar items.
pub mod events;

/// Configurable phrases.
pub mod phrases;

/// Label precedence rules.
pub mod rules;

/// Status-bar title and tooltip.
pub mod status;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use annotator::{CellAnnotation, CellAnnotator, CellAnnotatorBuilder, Emphasis};
pub use day_counter::{transition, DayCounter, DayCounterEvent, DayCounterState, DaysBetweenResult};
pub use events::{sort_oldest_to_newest, CalendarItem, Event};
pub use phrases::Phrases;
pub use rules::{resolve_label, Label, RuleContext};
