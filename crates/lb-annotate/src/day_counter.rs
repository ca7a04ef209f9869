//! Two-pick "days between" counter.
//!
//! The first pick arms the counter with an anchor date. Picking the same
//! date again re-arms it; picking a different date emits a
//! [`DaysBetweenResult`] and returns to [`DayCounterState::Idle`]. Closing
//! the session always drops the anchor.

use lb_lunar::LunarSolarConverter;
use lb_time::SolarDate;
use tracing::trace;

use crate::phrases::Phrases;

/// Counter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCounterState {
    /// No anchor.
    #[default]
    Idle,
    /// Waiting for the second pick.
    Armed(SolarDate),
}

/// Input to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCounterEvent {
    /// A date was picked.
    Pick(SolarDate),
    /// The interactive session ended.
    SessionClosed,
}

/// The span between two picked dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysBetweenResult {
    /// The earlier date.
    pub from: SolarDate,
    /// The later date.
    pub to: SolarDate,
    /// Absolute number of days from `from` to `to`.
    pub days: u32,
}

impl DaysBetweenResult {
    /// The confirmation message, with both dates in Chinese long form.
    pub fn message(&self, phrases: &Phrases) -> String {
        phrases.days_between_message(
            &self.from.to_chinese_string(),
            &self.to.to_chinese_string(),
            self.days,
        )
    }
}

/// Advance the counter by one event.
pub fn transition(
    state: DayCounterState,
    event: DayCounterEvent,
) -> (DayCounterState, Option<DaysBetweenResult>) {
    let next = match (state, event) {
        (_, DayCounterEvent::SessionClosed) => (DayCounterState::Idle, None),
        (DayCounterState::Idle, DayCounterEvent::Pick(d)) => (DayCounterState::Armed(d), None),
        (DayCounterState::Armed(first), DayCounterEvent::Pick(d)) if d == first => {
            (DayCounterState::Armed(d), None)
        }
        (DayCounterState::Armed(first), DayCounterEvent::Pick(d)) => {
            match LunarSolarConverter::new().days_between(first, d) {
                Ok(days) => (
                    DayCounterState::Idle,
                    Some(DaysBetweenResult {
                        from: first.min(d),
                        to: first.max(d),
                        days: days.unsigned_abs(),
                    }),
                ),
                Err(_) => (DayCounterState::Idle, None),
            }
        }
    };
    trace!(?state, ?event, next = ?next.0, emitted = next.1.is_some(), "day counter");
    next
}

/// A counter for one interactive session.
#[derive(Debug, Default)]
pub struct DayCounter {
    state: DayCounterState,
}

impl DayCounter {
    /// An idle counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DayCounterState {
        self.state
    }

    /// Feed a picked date.
    pub fn pick(&mut self, date: SolarDate) -> Option<DaysBetweenResult> {
        self.apply(DayCounterEvent::Pick(date))
    }

    /// End the session, dropping any anchor.
    pub fn close_session(&mut self) {
        self.apply(DayCounterEvent::SessionClosed);
    }

    fn apply(&mut self, event: DayCounterEvent) -> Option<DaysBetweenResult> {
        let (state, result) = transition(self.state, event);
        self.state = state;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn order_of_picks_does_not_matter() {
        let (s, r) = transition(
            DayCounterState::Armed(date(2024, 3, 10)),
            DayCounterEvent::Pick(date(2024, 3, 1)),
        );
        assert_eq!(s, DayCounterState::Idle);
        let r = r.unwrap();
        assert_eq!((r.from, r.to, r.days), (date(2024, 3, 1), date(2024, 3, 10), 9));
    }

    #[test]
    fn null_dates_emit_nothing() {
        let (s, r) = transition(
            DayCounterState::Armed(date(2024, 3, 10)),
            DayCounterEvent::Pick(SolarDate::NULL),
        );
        assert_eq!((s, r), (DayCounterState::Idle, None));
    }

    #[test]
    fn closing_an_idle_session_is_harmless() {
        let mut c = DayCounter::new();
        c.close_session();
        assert_eq!(c.state(), DayCounterState::Idle);
    }

    #[test]
    fn message() {
        let r = DaysBetweenResult {
            from: date(2024, 3, 1),
            to: date(2024, 3, 10),
            days: 9,
        };
        assert_eq!(r.message(&Phrases::default()), "2024年3月1日与2024年3月10日相隔9天");
    }
}
