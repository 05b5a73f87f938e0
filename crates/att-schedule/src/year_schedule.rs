//! `YearSchedule`: per-day period counts for one calendar year.

use att_core::errors::Result;
use att_core::{DailyPeriods, PeriodCount};
use att_time::{Date, HolidayCalendar, Month};

use crate::settings::WeekdayTemplate;

/// Per-month vectors of per-day period counts for a single year.
///
/// Month vectors always have the canonical length for the year (February has
/// 29 entries in leap years). Lookups go through `Option` so a day index past
/// the end of a month never reads a neighbouring month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSchedule {
    year: u16,
    months: Vec<Vec<DailyPeriods>>,
}

impl YearSchedule {
    /// Derive the schedule for `year` from a template and a holiday calendar.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported date range.
    pub fn build(
        year: u16,
        template: &WeekdayTemplate,
        calendar: &dyn HolidayCalendar,
    ) -> Result<Self> {
        Ok(Self::from_first_day(
            Date::start_of_year(year)?,
            template,
            calendar,
        ))
    }

    /// Derive the schedule of the year starting on `first` (a January 1).
    pub(crate) fn from_first_day(
        first: Date,
        template: &WeekdayTemplate,
        calendar: &dyn HolidayCalendar,
    ) -> Self {
        let year = first.year();
        let mut days = first.range_to(Date::MAX);
        let months = Month::ALL
            .iter()
            .map(|month| {
                days.by_ref()
                    .take(month.days_in(year) as usize)
                    .map(|d| {
                        if calendar.is_holiday(d) {
                            0
                        } else {
                            template.periods_on(d.weekday())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { year, months }
    }

    /// The calendar year this schedule covers.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Per-day counts for `month`; entry 0 is the 1st.
    pub fn month(&self, month: Month) -> &[DailyPeriods] {
        &self.months[month.index()]
    }

    /// Periods held on `day` (1-based) of `month`, or `None` if the month has
    /// no such day in this year.
    pub fn periods_on(&self, month: Month, day: u8) -> Option<DailyPeriods> {
        let index = usize::from(day).checked_sub(1)?;
        self.month(month).get(index).copied()
    }

    /// Periods held on `date`, or `None` if it belongs to another year.
    pub fn periods_on_date(&self, date: Date) -> Option<DailyPeriods> {
        if date.year() != self.year {
            return None;
        }
        self.periods_on(date.month(), date.day_of_month())
    }

    /// Periods held in `month`.
    pub fn month_total(&self, month: Month) -> PeriodCount {
        self.month(month).iter().map(|&p| p as PeriodCount).sum()
    }

    /// Periods held in the whole year.
    pub fn total(&self) -> PeriodCount {
        Month::ALL.iter().map(|m| self.month_total(*m)).sum()
    }

    /// Periods held from `first` to `last` inclusive, by month slicing.
    ///
    /// Dates outside this year are clamped to its first or last day; an empty
    /// or out-of-year span sums to zero.
    pub fn periods_between(&self, first: Date, last: Date) -> PeriodCount {
        let lo = match first.year().cmp(&self.year) {
            std::cmp::Ordering::Less => (Month::January, 1),
            std::cmp::Ordering::Equal => (first.month(), first.day_of_month()),
            std::cmp::Ordering::Greater => return 0,
        };
        let hi = match last.year().cmp(&self.year) {
            std::cmp::Ordering::Less => return 0,
            std::cmp::Ordering::Equal => (last.month(), last.day_of_month()),
            std::cmp::Ordering::Greater => (Month::December, 31),
        };
        if lo > hi {
            return 0;
        }
        Month::ALL[lo.0.index()..=hi.0.index()]
            .iter()
            .map(|&month| {
                let days = self.month(month);
                let from = if month == lo.0 { lo.1 as usize - 1 } else { 0 };
                let to = if month == hi.0 { hi.1 as usize } else { days.len() };
                days.get(from..to)
                    .unwrap_or_default()
                    .iter()
                    .map(|&p| p as PeriodCount)
                    .sum::<PeriodCount>()
            })
            .sum()
    }
}
