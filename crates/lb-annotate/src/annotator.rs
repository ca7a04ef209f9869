//! `CellAnnotator` — everything a date cell displays, in one record.

use std::sync::Arc;

use lb_core::errors::{Error, Result};
use lb_core::Settings;
use lb_holidays::{HolidayManager, HolidayType};
use lb_lunar::fmt::{lunar_date_string, strip_leading_digits};
use lb_lunar::{FestivalTable, LunarDate, LunarSolarConverter, SolarTermCache, SolarTermSource};
use lb_time::{Clock, SolarDate, SystemClock, Weekday};
use tracing::error;

use crate::events::{titles, CalendarItem};
use crate::phrases::Phrases;
use crate::rules::{default_label, resolve_label, Label, RuleContext};

/// Visual weight of a cell element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Full strength.
    Primary,
    /// Weekend days of the displayed month.
    Secondary,
    /// Days outside the displayed month.
    Tertiary,
}

impl Emphasis {
    /// Emphasis of a cell's `(labels, marks)`.
    ///
    /// Inside the displayed month, labels are [`Secondary`](Emphasis::Secondary)
    /// on weekends other than today and marks are always
    /// [`Primary`](Emphasis::Primary). Outside it, or without a month, both
    /// are [`Tertiary`](Emphasis::Tertiary).
    pub fn for_cell(
        date: SolarDate,
        today: SolarDate,
        month_context: Option<SolarDate>,
    ) -> (Emphasis, Emphasis) {
        match month_context {
            Some(month) if month.is_same_month(date) => {
                let label = if date.weekday().is_weekend() && date != today {
                    Emphasis::Secondary
                } else {
                    Emphasis::Primary
                };
                (label, Emphasis::Primary)
            }
            _ => (Emphasis::Tertiary, Emphasis::Tertiary),
        }
    }
}

/// The annotation of one date cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAnnotation {
    /// The annotated date.
    pub date: SolarDate,
    /// Day of the month, 1–31.
    pub solar_day: u8,
    /// Day of the week.
    pub weekday: Weekday,
    /// Lunar identity of `date`.
    pub lunar_date: LunarDate,
    /// The lunar label as displayed; empty if it could not be formed.
    pub lunar_label: String,
    /// The precedence rule that set the label, if any.
    pub label: Option<Label>,
    /// Statutory adjustment.
    pub holiday_type: HolidayType,
    /// `date` is today.
    pub is_today: bool,
    /// `date` is the last day of its lunar year.
    pub is_cny_eve: bool,
    /// Relative-day phrase, e.g. `"（3天后）"`.
    pub day_offset_phrase: String,
    /// Holiday tag, lunar date, and offset phrase, joined with no separator.
    pub main_info: String,
    /// Titles of the cell's calendar items.
    pub event_titles: Vec<String>,
    /// Spoken description of the cell.
    pub accessibility_text: String,
    /// Emphasis of the solar and lunar labels.
    pub label_emphasis: Emphasis,
    /// Emphasis of the event and holiday marks.
    pub mark_emphasis: Emphasis,
}

/// Builds [`CellAnnotation`]s from a converter, a solar-term source, a
/// holiday manager, and a clock.
#[derive(Debug, Clone)]
pub struct CellAnnotator {
    converter: LunarSolarConverter,
    festivals: FestivalTable,
    terms: Arc<dyn SolarTermSource>,
    holidays: Arc<HolidayManager>,
    clock: Arc<dyn Clock>,
    phrases: Phrases,
    settings: Settings,
}

impl CellAnnotator {
    /// Start building an annotator.
    pub fn builder() -> CellAnnotatorBuilder {
        CellAnnotatorBuilder::default()
    }

    /// Annotate `date`, looking its holiday type up in the manager.
    pub fn annotate_cell<E: CalendarItem>(
        &self,
        date: SolarDate,
        events: &[E],
        month_context: Option<SolarDate>,
    ) -> Result<CellAnnotation> {
        let holiday_type = self.holidays.type_of_date(date);
        self.annotate(date, events, month_context, holiday_type)
    }

    /// Annotate `date`.
    ///
    /// `month_context` is any date in the month being displayed.
    ///
    /// # Errors
    /// [`Error::Conversion`] if `date` lies outside the lunar tables. A
    /// label or phrase that cannot be formed is logged and left empty.
    pub fn annotate<E: CalendarItem>(
        &self,
        date: SolarDate,
        events: &[E],
        month_context: Option<SolarDate>,
        holiday_type: HolidayType,
    ) -> Result<CellAnnotation> {
        let lunar = self.converter.to_lunar(date)?;
        let (_, last_day) = self.converter.lunar_year_span(lunar.year())?;
        let today = self.clock.today().unwrap_or_else(|e| {
            error!(%date, error = %e, "clock unavailable");
            SolarDate::NULL
        });

        let terms = match self.terms.terms_for(lunar.year()) {
            Ok(info) => Some(info),
            Err(e) => {
                error!(%date, error = %e, "solar terms unavailable");
                None
            }
        };
        let ctx = RuleContext {
            date,
            lunar,
            last_day_of_lunar_year: last_day,
            festivals: &self.festivals,
            terms: terms.as_deref(),
        };
        let label = resolve_label(&ctx);
        let lunar_label = match label {
            Some(l) => l.text(&self.phrases),
            None => default_label(&lunar, self.settings.optical_month_spacing)
                .unwrap_or_else(|| {
                    missing(date, "lunar day label");
                    String::new()
                }),
        };

        let day_offset_phrase = match self.converter.days_between(today, date) {
            Ok(days) => self.phrases.day_offset(days),
            Err(e) => {
                error!(%date, %today, error = %e, "no day offset");
                String::new()
            }
        };

        let mut main_info = String::new();
        if let Some(tag) = self.phrases.holiday_label(holiday_type) {
            main_info.push_str(tag);
        }
        match lunar_date_string(&lunar) {
            Some(text) => main_info.push_str(strip_leading_digits(&text)),
            None => missing(date, "formatted lunar date"),
        }
        main_info.push_str(&day_offset_phrase);

        let event_titles = titles(events);
        let details = if event_titles.is_empty() {
            main_info.clone()
        } else {
            format!("{main_info}\n\n{}", event_titles.join("\n"))
        };
        let solar_day = date.day_of_month();
        let accessibility_text = [solar_day.to_string(), lunar_label.clone(), details].join(" ");

        let (label_emphasis, mark_emphasis) = Emphasis::for_cell(date, today, month_context);

        Ok(CellAnnotation {
            date,
            solar_day,
            weekday: date.weekday(),
            lunar_date: lunar,
            lunar_label,
            label,
            holiday_type,
            is_today: date == today,
            is_cny_eve: label == Some(Label::NewYearsEve),
            day_offset_phrase,
            main_info,
            event_titles,
            accessibility_text,
            label_emphasis,
            mark_emphasis,
        })
    }

    /// Annotate every day of the month containing `month`, in order.
    pub fn annotate_month(&self, month: SolarDate) -> Result<Vec<CellAnnotation>> {
        let mut day = month.start_of_month();
        let last = month.end_of_month();
        let mut cells = Vec::with_capacity(31);
        while day <= last {
            cells.push(self.annotate_cell::<crate::events::Event>(day, &[], Some(month))?);
            day = day.add_days(1)?;
        }
        Ok(cells)
    }
}

fn missing(date: SolarDate, component: &str) {
    let e = Error::MissingComponent(component.to_owned());
    error!(%date, error = %e, "failed to decompose date");
}

/// Builder for [`CellAnnotator`].
///
/// Unset collaborators default to a [`SolarTermCache`] for the configured
/// zone, the bundled holiday data, and the system clock.
#[derive(Debug, Default)]
pub struct CellAnnotatorBuilder {
    terms: Option<Arc<dyn SolarTermSource>>,
    holidays: Option<Arc<HolidayManager>>,
    clock: Option<Arc<dyn Clock>>,
    phrases: Phrases,
    settings: Settings,
}

impl CellAnnotatorBuilder {
    /// Use `terms` for solar-term lookups.
    pub fn with_terms(mut self, terms: Arc<dyn SolarTermSource>) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Use `holidays` for adjustment lookups.
    pub fn with_holidays(mut self, holidays: Arc<HolidayManager>) -> Self {
        self.holidays = Some(holidays);
        self
    }

    /// Use `clock` for "today".
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use `phrases`.
    pub fn with_phrases(mut self, phrases: Phrases) -> Self {
        self.phrases = phrases;
        self
    }

    /// Use `settings`.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the annotator.
    ///
    /// # Errors
    /// [`Error::Parse`] if the bundled holiday data is needed and does not
    /// parse.
    pub fn build(self) -> Result<CellAnnotator> {
        let terms = match self.terms {
            Some(t) => t,
            None => Arc::new(SolarTermCache::new(&self.settings)),
        };
        let holidays = match self.holidays {
            Some(h) => h,
            None => Arc::new(HolidayManager::with_default_data()?),
        };
        Ok(CellAnnotator {
            converter: LunarSolarConverter::new(),
            festivals: FestivalTable,
            terms,
            holidays,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            phrases: self.phrases,
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use lb_time::FixedClock;

    fn date(y: u16, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    fn annotator(today: SolarDate) -> CellAnnotator {
        CellAnnotator::builder()
            .with_clock(Arc::new(FixedClock(today)))
            .with_holidays(Arc::new(HolidayManager::empty()))
            .build()
            .unwrap()
    }

    #[test]
    fn emphasis_rules() {
        let today = date(2024, 3, 6);
        let sat = date(2024, 3, 9);
        let month = Some(date(2024, 3, 1));
        assert_eq!(
            Emphasis::for_cell(sat, today, month),
            (Emphasis::Secondary, Emphasis::Primary)
        );
        assert_eq!(
            Emphasis::for_cell(sat, sat, month),
            (Emphasis::Primary, Emphasis::Primary)
        );
        assert_eq!(
            Emphasis::for_cell(date(2024, 2, 29), today, month),
            (Emphasis::Tertiary, Emphasis::Tertiary)
        );
        assert_eq!(
            Emphasis::for_cell(today, today, None),
            (Emphasis::Tertiary, Emphasis::Tertiary)
        );
    }

    #[test]
    fn out_of_range_is_a_hard_error() {
        let a = annotator(date(2024, 3, 1));
        let result = a.annotate_cell::<Event>(date(2150, 1, 1), &[], None);
        assert!(matches!(result, Err(Error::Conversion(_))));
    }

    #[test]
    fn unknown_today_drops_only_the_offset() {
        let a = annotator(SolarDate::NULL);
        let cell = a.annotate_cell::<Event>(date(2024, 3, 10), &[], None).unwrap();
        assert_eq!(cell.day_offset_phrase, "");
        assert_eq!(cell.lunar_label, "\u{2009}二月");
        assert_eq!(cell.main_info, "甲辰年二月初一");
        assert!(!cell.is_today);
    }

    #[test]
    fn month_grid() {
        let a = annotator(date(2024, 2, 15));
        let cells = a.annotate_month(date(2024, 2, 15)).unwrap();
        assert_eq!(cells.len(), 29);
        assert!(cells[8].is_cny_eve);
        assert!(cells[14].is_today);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
    }
}
