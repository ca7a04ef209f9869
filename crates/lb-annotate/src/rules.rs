//! Lunar label precedence.
//!
//! A cell's lunar label is the first hit of [`LABEL_RULES`], in order:
//! New Year's Eve, then a festival, then a solar term. With no hit the cell
//! keeps its [`default_label`], the month name on day 1 and the day name
//! otherwise.

use lb_lunar::fmt::{day_name, month_name};
use lb_lunar::{Festival, FestivalTable, LunarDate, LunarYearInfo, SolarTerm};
use lb_time::SolarDate;

use crate::phrases::Phrases;

/// Thin space (U+2009) placed before month labels to centre them optically.
pub const THIN_SPACE: char = '\u{2009}';

/// A label chosen by a precedence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The last day of the lunar year.
    NewYearsEve,
    /// A fixed lunar festival.
    Festival(Festival),
    /// A solar term.
    SolarTerm(SolarTerm),
}

impl Label {
    /// Display text.
    pub fn text(&self, phrases: &Phrases) -> String {
        match self {
            Label::NewYearsEve => phrases.new_years_eve.clone(),
            Label::Festival(f) => f.chinese_name().to_owned(),
            Label::SolarTerm(t) => t.chinese_name().to_owned(),
        }
    }
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The cell's solar date.
    pub date: SolarDate,
    /// Its lunar date.
    pub lunar: LunarDate,
    /// Last day of the lunar year containing `date`.
    pub last_day_of_lunar_year: SolarDate,
    /// Festival lookup.
    pub festivals: &'a FestivalTable,
    /// Solar terms of `lunar.year()`, if available.
    pub terms: Option<&'a LunarYearInfo>,
}

/// A precedence rule.
pub type LabelRule = fn(&RuleContext<'_>) -> Option<Label>;

/// The rules, highest precedence first.
pub const LABEL_RULES: [LabelRule; 3] = [new_years_eve, festival, solar_term];

/// The New Year's Eve rule.
pub fn new_years_eve(ctx: &RuleContext<'_>) -> Option<Label> {
    (ctx.date == ctx.last_day_of_lunar_year).then_some(Label::NewYearsEve)
}

/// The festival rule. Leap-month days share their month's keys.
pub fn festival(ctx: &RuleContext<'_>) -> Option<Label> {
    let key = ctx.lunar.month_day().ok()?;
    ctx.festivals.festival_for(key).map(Label::Festival)
}

/// The solar-term rule, keyed by the solar `MMDD`.
pub fn solar_term(ctx: &RuleContext<'_>) -> Option<Label> {
    ctx.terms?
        .term_on(ctx.date.month_day())
        .map(Label::SolarTerm)
}

/// The first label produced by [`LABEL_RULES`].
pub fn resolve_label(ctx: &RuleContext<'_>) -> Option<Label> {
    LABEL_RULES.iter().find_map(|rule| rule(ctx))
}

/// The label shown when no rule applies, or `None` when the month or day
/// has no name.
///
/// Month names are looked up with `month - 1` and day names with
/// `day - 1`.
pub fn default_label(lunar: &LunarDate, optical_spacing: bool) -> Option<String> {
    if lunar.day() == 1 {
        let name = month_name(usize::from(lunar.month()) - 1, lunar.is_leap_month())?;
        Some(if optical_spacing {
            format!("{THIN_SPACE}{name}")
        } else {
            name
        })
    } else {
        day_name(usize::from(lunar.day()) - 1).map(str::to_owned)
    }
}
