//! Statutory working-day calendar.

use std::sync::Arc;

use lb_time::{Calendar, SolarDate};

use crate::dataset::HolidayType;
use crate::manager::HolidayManager;

/// A working-day calendar that follows a [`HolidayManager`].
///
/// Adjusted workdays are business days even on weekends, adjusted
/// holidays never are, and every other day follows the Saturday/Sunday
/// weekend.
#[derive(Debug, Clone)]
pub struct StatutoryCalendar {
    manager: Arc<HolidayManager>,
}

impl StatutoryCalendar {
    /// A calendar reading from `manager`. Later refreshes of the manager
    /// are picked up.
    pub fn new(manager: Arc<HolidayManager>) -> Self {
        Self { manager }
    }
}

impl Calendar for StatutoryCalendar {
    fn name(&self) -> &str {
        "China (statutory)"
    }

    fn is_business_day(&self, date: SolarDate) -> bool {
        match self.manager.type_of_date(date) {
            HolidayType::Workday => true,
            HolidayType::Holiday => false,
            HolidayType::None => !self.is_weekend(date),
        }
    }
}
