//! User-visible phrases.
//!
//! Every phrase carries its own brackets and spacing. The annotator joins
//! them with no separator, so `"[休]"`, `"甲辰年正月初一"` and `"（今天）"`
//! become `"[休]甲辰年正月初一（今天）"`.
//!
//! Templates use `{n}` for a day count and `{from}`, `{to}`, `{days}` in the
//! days-between message.

use lb_core::errors::Result;
use lb_holidays::HolidayType;
use serde::{Deserialize, Serialize};

/// The phrase set used by the annotator and the day counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Phrases {
    /// Tag for a statutory day off.
    pub holiday_tag: String,
    /// Tag for an adjusted working day.
    pub workday_tag: String,
    /// Offset phrase for today.
    pub today: String,
    /// Offset phrase for a future date; `{n}` is the day count.
    pub days_later: String,
    /// Offset phrase for a past date; `{n}` is the absolute day count.
    pub days_ago: String,
    /// Label of the last day of a lunar year.
    pub new_years_eve: String,
    /// Days-between message; `{from}`, `{to}`, `{days}`.
    pub days_between: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            holiday_tag: "[休]".into(),
            workday_tag: "[班]".into(),
            today: "（今天）".into(),
            days_later: "（{n}天后）".into(),
            days_ago: "（{n}天前）".into(),
            new_years_eve: "除夕".into(),
            days_between: "{from}与{to}相隔{days}天".into(),
        }
    }
}

impl Phrases {
    /// English phrases.
    pub fn english() -> Self {
        Self {
            holiday_tag: "[Holiday] ".into(),
            workday_tag: "[Workday] ".into(),
            today: " (Today)".into(),
            days_later: " ({n} days later)".into(),
            days_ago: " ({n} days ago)".into(),
            new_years_eve: "New Year's Eve".into(),
            days_between: "{from} and {to} are {days} days apart".into(),
        }
    }

    /// Load phrases from JSON; missing fields keep the Chinese defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The tag for `kind`, or `None` when the day is not adjusted.
    pub fn holiday_label(&self, kind: HolidayType) -> Option<&str> {
        match kind {
            HolidayType::None => None,
            HolidayType::Workday => Some(self.workday_tag.as_str()),
            HolidayType::Holiday => Some(self.holiday_tag.as_str()),
        }
    }

    /// The relative-day phrase for a signed offset from today.
    pub fn day_offset(&self, days: i32) -> String {
        match days {
            0 => self.today.clone(),
            n if n > 0 => self.days_later.replace("{n}", &n.to_string()),
            n => self.days_ago.replace("{n}", &n.unsigned_abs().to_string()),
        }
    }

    /// Fill the days-between template.
    pub fn days_between_message(&self, from: &str, to: &str, days: u32) -> String {
        self.days_between
            .replace("{from}", from)
            .replace("{to}", to)
            .replace("{days}", &days.to_string())
    }
}
