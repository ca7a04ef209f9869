//! Calendar items shown on a date cell.

use chrono::NaiveDateTime;
use lb_core::errors::{Error, Result};
use lb_time::SolarDate;
use serde::{Deserialize, Serialize};

/// An item from the user's calendar. The annotator only reads titles; the
/// rest orders items for display.
pub trait CalendarItem: std::fmt::Debug {
    /// Title, if the item has one.
    fn title(&self) -> Option<&str>;

    /// Local start instant.
    fn start(&self) -> NaiveDateTime;

    /// Local end instant.
    fn end(&self) -> NaiveDateTime;

    /// `true` for all-day items.
    fn is_all_day(&self) -> bool;

    /// `true` for completed reminders.
    fn is_completed(&self) -> bool {
        false
    }
}

/// A plain calendar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Title.
    pub title: Option<String>,
    /// Start.
    pub start: NaiveDateTime,
    /// End.
    pub end: NaiveDateTime,
    /// All-day flag.
    #[serde(default)]
    pub all_day: bool,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    /// A timed event.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: Some(title.into()),
            start,
            end,
            all_day: false,
            completed: false,
        }
    }

    /// An all-day event on `date`.
    pub fn all_day(title: impl Into<String>, date: SolarDate) -> Result<Self> {
        let start = date
            .to_naive_date()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::Date(format!("no calendar day for {date:?}")))?;
        let end = start + chrono::Duration::days(1);
        Ok(Self {
            title: Some(title.into()),
            start,
            end,
            all_day: true,
            completed: false,
        })
    }

    /// Mark the event completed.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl CalendarItem for Event {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }

    fn is_all_day(&self) -> bool {
        self.all_day
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl<T: CalendarItem + ?Sized> CalendarItem for &T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }

    fn is_all_day(&self) -> bool {
        (**self).is_all_day()
    }

    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }
}

/// Sort items for display: all-day items first, then by start and end.
/// Ties keep their input order.
pub fn sort_oldest_to_newest<T: CalendarItem>(items: &mut [T]) {
    items.sort_by_key(|item| (!item.is_all_day(), item.start(), item.end()));
}

/// Titles of `items`, skipping untitled ones.
pub fn titles<T: CalendarItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.title().map(str::to_owned))
        .collect()
}
