//! Bespoke calendar: explicit, year-specific holiday dates.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use std::collections::BTreeSet;

/// A calendar whose holidays are individual dates added at run time.
///
/// Unlike a recurring month/day table, each entry applies to one year only,
/// so it can carry a real term calendar.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar pre-populated with `dates`.
    pub fn with_holidays(name: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Add a holiday. Returns `false` if it was already present.
    pub fn add_holiday(&mut self, date: Date) -> bool {
        self.holidays.insert(date)
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) -> bool {
        self.holidays.remove(&date)
    }

    /// Return the number of holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    fn holidays_between(&self, from: Date, to: Date) -> Vec<Date> {
        if from > to {
            return Vec::new();
        }
        self.holidays.range(from..=to).copied().collect()
    }
}
