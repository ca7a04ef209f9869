//! Holiday dataset schema.
//!
//! A dataset is a JSON array of `{ "year", "monthDay", "type" }` records,
//! with no version field:
//!
//! ```json
//! [
//!   { "year": 2024, "monthDay": "0210", "type": "holiday" },
//!   { "year": 2024, "monthDay": "0218", "type": "workday" }
//! ]
//! ```

use std::fmt;

use lb_core::errors::Result;
use lb_time::MonthDay;
use serde::{Deserialize, Serialize};

const BUNDLED_JSON: &str = include_str!("../data/default_holidays.json");

/// How a day's normal working status is adjusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// No adjustment.
    #[default]
    #[serde(skip)]
    None,
    /// A working day, typically a weekend made up for a holiday.
    Workday,
    /// A statutory day off.
    Holiday,
}

impl HolidayType {
    /// `true` unless [`HolidayType::None`].
    pub fn is_adjusted(self) -> bool {
        self != HolidayType::None
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HolidayType::None => "none",
            HolidayType::Workday => "workday",
            HolidayType::Holiday => "holiday",
        })
    }
}

/// One `(year, MMDD) → type` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    /// Gregorian year.
    pub year: i32,
    /// Solar month and day.
    pub month_day: MonthDay,
    /// The adjustment.
    #[serde(rename = "type")]
    pub kind: HolidayType,
}

impl HolidayEntry {
    /// Create an entry.
    pub fn new(year: i32, month_day: MonthDay, kind: HolidayType) -> Self {
        Self {
            year,
            month_day,
            kind,
        }
    }
}

/// An ordered collection of holiday entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayDataset {
    entries: Vec<HolidayEntry>,
}

impl HolidayDataset {
    /// Parse a dataset from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render the dataset as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The dataset compiled into this crate: mainland China statutory
    /// arrangements for 2024 and 2025.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Entries in the order they were given.
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HolidayEntry) {
        self.entries.push(entry);
    }
}

impl FromIterator<HolidayEntry> for HolidayDataset {
    fn from_iter<I: IntoIterator<Item = HolidayEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
