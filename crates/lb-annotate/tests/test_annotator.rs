//! Integration tests for `CellAnnotator`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use lb_annotate::{CellAnnotator, Emphasis, Event, Label, Phrases};
use lb_core::errors::{Error, Result};
use lb_core::Settings;
use lb_holidays::{HolidayManager, HolidayType};
use lb_lunar::{Festival, LunarYearInfo, SolarTerm, SolarTermSource};
use lb_time::{FixedClock, MonthDay, SolarDate};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(y: u16, m: u8, d: u8) -> SolarDate {
    SolarDate::from_ymd(y, m, d).unwrap()
}

fn md(s: &str) -> MonthDay {
    s.parse().unwrap()
}

fn annotator(today: SolarDate) -> CellAnnotator {
    CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(today)))
        .build()
        .unwrap()
}

fn no_events() -> &'static [Event] {
    &[]
}

/// Term tables given up front; years without one have no terms.
#[derive(Debug, Default)]
struct FixtureTerms(HashMap<i32, Arc<LunarYearInfo>>);

impl FixtureTerms {
    fn with(mut self, year: i32, entries: &[(&str, SolarTerm)]) -> Self {
        let info = LunarYearInfo::from_entries(year, entries.iter().map(|&(k, t)| (md(k), t)));
        self.0.insert(year, Arc::new(info));
        self
    }
}

impl SolarTermSource for FixtureTerms {
    fn terms_for(&self, lunar_year: i32) -> Result<Arc<LunarYearInfo>> {
        Ok(self.0.get(&lunar_year).cloned().unwrap_or_else(|| {
            Arc::new(LunarYearInfo::from_entries(
                lunar_year,
                Vec::<(MonthDay, SolarTerm)>::new(),
            ))
        }))
    }
}

#[derive(Debug)]
struct Unavailable;

impl SolarTermSource for Unavailable {
    fn terms_for(&self, lunar_year: i32) -> Result<Arc<LunarYearInfo>> {
        Err(Error::MissingComponent(format!("terms of {lunar_year}")))
    }
}

// ─── Golden output ────────────────────────────────────────────────────────────

#[test]
fn main_info_is_joined_without_separators() {
    let a = annotator(date(2024, 4, 1));
    let cell = a.annotate_cell(date(2024, 4, 4), no_events(), None).unwrap();
    assert_eq!(cell.holiday_type, HolidayType::Holiday);
    assert_eq!(cell.lunar_label, "清明");
    assert_eq!(cell.main_info, "[休]甲辰年二月廿六（3天后）");
    assert_eq!(cell.accessibility_text, "4 清明 [休]甲辰年二月廿六（3天后）");
}

#[test]
fn workday_tag_and_days_ago() {
    let a = annotator(date(2024, 2, 20));
    let cell = a.annotate_cell(date(2024, 2, 18), no_events(), None).unwrap();
    assert_eq!(cell.holiday_type, HolidayType::Workday);
    assert_eq!(cell.main_info, "[班]甲辰年正月初九（2天前）");
    assert_eq!(cell.day_offset_phrase, "（2天前）");
}

#[test]
fn event_titles_follow_a_blank_line() {
    let a = annotator(date(2024, 4, 4));
    let start = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let end = start + chrono::Duration::hours(1);
    let events = [Event::new("扫墓", start, end), Event::new("Dentist", start, end)];
    let cell = a.annotate_cell(date(2024, 4, 4), &events, None).unwrap();
    assert!(cell.is_today);
    assert_eq!(cell.event_titles, ["扫墓", "Dentist"]);
    assert_eq!(
        cell.accessibility_text,
        "4 清明 [休]甲辰年二月廿六（今天）\n\n扫墓\nDentist"
    );
}

#[test]
fn untitled_events_do_not_add_a_details_block() {
    let a = annotator(date(2024, 3, 6));
    let start = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let mut untitled = Event::new("", start, start);
    untitled.title = None;
    let cell = a.annotate_cell(date(2024, 3, 6), &[untitled], None).unwrap();
    assert_eq!(cell.accessibility_text, format!("6 廿六 {}", cell.main_info));
}

#[test]
fn english_phrases() {
    let a = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2024, 4, 4))))
        .with_phrases(Phrases::english())
        .build()
        .unwrap();
    let cell = a.annotate_cell(date(2024, 4, 4), no_events(), None).unwrap();
    assert_eq!(cell.main_info, "[Holiday] 甲辰年二月廿六 (Today)");
    let eve = a.annotate_cell(date(2024, 2, 9), no_events(), None).unwrap();
    assert_eq!(eve.lunar_label, "New Year's Eve");
}

// ─── Default labels ───────────────────────────────────────────────────────────

#[test]
fn first_day_shows_the_month_with_a_thin_space() {
    let a = annotator(date(2024, 3, 1));
    let cell = a.annotate_cell(date(2024, 3, 10), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "\u{2009}二月");
    assert_eq!(cell.label, None);
    assert_eq!(cell.accessibility_text, "10 \u{2009}二月 甲辰年二月初一（9天后）");

    let plain = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2024, 3, 1))))
        .with_settings(Settings {
            optical_month_spacing: false,
            ..Settings::default()
        })
        .build()
        .unwrap();
    let cell = plain.annotate_cell(date(2024, 3, 10), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "二月");
}

#[test]
fn leap_months_carry_the_marker() {
    let a = annotator(date(2020, 5, 23));
    let cell = a.annotate_cell(date(2020, 5, 23), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "\u{2009}闰四月");
    assert_eq!(cell.main_info, "庚子年闰四月初一（今天）");
    assert!(cell.lunar_date.is_leap_month());
}

#[test]
fn ordinary_days_use_day_names() {
    let a = annotator(date(2024, 1, 1));
    let cell = a.annotate_cell(date(2024, 1, 10), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "廿九");
    assert_eq!(cell.day_offset_phrase, "（9天后）");
}

// ─── Precedence ───────────────────────────────────────────────────────────────

#[test]
fn festival_beats_a_coinciding_term() {
    let a = annotator(date(2011, 6, 1));
    let cell = a.annotate_cell(date(2011, 6, 6), no_events(), None).unwrap();
    assert_eq!(cell.label, Some(Label::Festival(Festival::DragonBoat)));
    assert_eq!(cell.lunar_label, "端午节");
    assert_eq!(cell.main_info, "辛卯年五月初五（5天后）");

    let fixture = FixtureTerms::default().with(2011, &[("0606", SolarTerm::GrainInEar)]);
    let a = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2011, 6, 1))))
        .with_terms(Arc::new(fixture))
        .build()
        .unwrap();
    let cell = a.annotate_cell(date(2011, 6, 6), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "端午节");
}

#[test]
fn festivals_in_leap_months() {
    let a = annotator(date(1995, 10, 1));
    let cell = a.annotate_cell(date(1995, 10, 9), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "中秋节");
}

#[test]
fn eve_beats_festival_and_term() {
    let a = annotator(date(2019, 2, 1));
    // 立春 and the last day of lunar 2018.
    let cell = a.annotate_cell(date(2019, 2, 4), no_events(), None).unwrap();
    assert!(cell.is_cny_eve);
    assert_eq!(cell.lunar_label, "除夕");
    assert_eq!(cell.main_info, "戊戌年腊月三十（3天后）");

    // A term fixture on the eve changes nothing.
    let fixture = FixtureTerms::default().with(2018, &[("0204", SolarTerm::StartOfSpring)]);
    let a = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2019, 2, 1))))
        .with_terms(Arc::new(fixture))
        .build()
        .unwrap();
    let cell = a.annotate_cell(date(2019, 2, 4), no_events(), None).unwrap();
    assert_eq!(cell.label, Some(Label::NewYearsEve));
}

#[test]
fn eve_is_the_last_day_whatever_its_number() {
    let a = annotator(date(2025, 1, 1));
    let short = a.annotate_cell(date(2025, 1, 28), no_events(), None).unwrap();
    assert!(short.is_cny_eve);
    assert_eq!(short.lunar_date.day(), 29);
    assert_eq!(short.main_info, "[休]甲辰年腊月廿九（27天后）");

    let long = a.annotate_cell(date(2024, 2, 9), no_events(), None).unwrap();
    assert!(long.is_cny_eve);
    assert_eq!(long.lunar_date.day(), 30);

    let day_before = a.annotate_cell(date(2025, 1, 27), no_events(), None).unwrap();
    assert!(!day_before.is_cny_eve);
    assert_eq!(day_before.lunar_label, "廿八");
}

#[test]
fn terms_across_the_gregorian_new_year() {
    let a = annotator(date(2025, 1, 1));
    let cell = a.annotate_cell(date(2025, 1, 5), no_events(), None).unwrap();
    assert_eq!(cell.label, Some(Label::SolarTerm(SolarTerm::MinorCold)));
    let solstice = a.annotate_cell(date(2024, 12, 21), no_events(), None).unwrap();
    assert_eq!(solstice.lunar_label, "冬至");
}

// ─── Degradation ──────────────────────────────────────────────────────────────

#[test]
fn missing_terms_degrade_to_the_day_label() {
    init_logging();
    let a = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2024, 4, 4))))
        .with_terms(Arc::new(Unavailable))
        .build()
        .unwrap();
    let cell = a.annotate_cell(date(2024, 4, 4), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "廿六");
    assert_eq!(cell.main_info, "[休]甲辰年二月廿六（今天）");
}

#[test]
fn unknown_today_keeps_the_rest_of_the_cell() {
    init_logging();
    let a = annotator(SolarDate::NULL);
    let cell = a.annotate_cell(date(2024, 4, 4), no_events(), None).unwrap();
    assert_eq!(cell.lunar_label, "清明");
    assert_eq!(cell.day_offset_phrase, "");
    assert_eq!(cell.main_info, "[休]甲辰年二月廿六");
    assert_eq!(cell.accessibility_text, "4 清明 [休]甲辰年二月廿六");
    assert!(!cell.is_today);
}

#[test]
fn explicit_holiday_type_is_used_verbatim() {
    let a = annotator(date(2024, 3, 6));
    let cell = a
        .annotate(date(2024, 3, 6), no_events(), None, HolidayType::Workday)
        .unwrap();
    assert_eq!(cell.holiday_type, HolidayType::Workday);
    assert!(cell.main_info.starts_with("[班]"));
}

#[test]
fn refreshed_holidays_reach_the_annotator() {
    let holidays = Arc::new(HolidayManager::empty());
    let a = CellAnnotator::builder()
        .with_clock(Arc::new(FixedClock(date(2024, 3, 6))))
        .with_holidays(Arc::clone(&holidays))
        .build()
        .unwrap();
    assert_eq!(
        a.annotate_cell(date(2024, 3, 8), no_events(), None).unwrap().holiday_type,
        HolidayType::None
    );
    holidays.refresh(
        lb_holidays::HolidayDataset::from_json(
            r#"[{ "year": 2024, "monthDay": "0308", "type": "holiday" }]"#,
        )
        .unwrap(),
    );
    assert_eq!(
        a.annotate_cell(date(2024, 3, 8), no_events(), None).unwrap().holiday_type,
        HolidayType::Holiday
    );
}

#[test]
fn out_of_range_dates_are_errors() {
    let a = annotator(date(2024, 3, 6));
    assert!(matches!(
        a.annotate_cell(date(1900, 1, 30), no_events(), None),
        Err(Error::Conversion(_))
    ));
}

// ─── Emphasis ─────────────────────────────────────────────────────────────────

#[test]
fn emphasis_from_month_context() {
    let a = annotator(date(2024, 3, 6));
    let month = Some(date(2024, 3, 1));
    let weekend = a.annotate_cell(date(2024, 3, 9), no_events(), month).unwrap();
    assert_eq!(weekend.label_emphasis, Emphasis::Secondary);
    assert_eq!(weekend.mark_emphasis, Emphasis::Primary);
    let spill = a.annotate_cell(date(2024, 4, 1), no_events(), month).unwrap();
    assert_eq!((spill.label_emphasis, spill.mark_emphasis), (Emphasis::Tertiary, Emphasis::Tertiary));
}
