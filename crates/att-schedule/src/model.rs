//! `ScheduleModel`: owner of the active settings and the per-year cache.
//!
//! The model is the only place settings live. Year schedules are derived on
//! first use and memoised per year through interior mutability, so lookups
//! work from `&self`; every update takes `&mut self` and clears the whole
//! cache before it returns.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, info, warn};

use att_core::errors::Result;
use att_core::{DailyPeriods, PeriodCount};
use att_time::{Date, HolidayCalendar};

use crate::holiday_table::HolidayTable;
use crate::settings::{PeriodSettings, RequiredPercentage, WeekdayTemplate};
use crate::source::PeriodSource;
use crate::year_schedule::YearSchedule;

/// Weekly template, threshold, and holiday calendar, with cached year
/// schedules.
#[derive(Debug)]
pub struct ScheduleModel {
    settings: PeriodSettings,
    calendar: Box<dyn HolidayCalendar>,
    cache: RefCell<HashMap<u16, Rc<YearSchedule>>>,
}

impl ScheduleModel {
    /// Create a model with the given settings and holiday calendar.
    pub fn new(settings: PeriodSettings, calendar: impl HolidayCalendar + 'static) -> Self {
        Self {
            settings,
            calendar: Box::new(calendar),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Create a model with the given settings and the academic holiday table.
    pub fn with_settings(settings: PeriodSettings) -> Self {
        Self::new(settings, HolidayTable::academic_default())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The active settings.
    pub fn settings(&self) -> &PeriodSettings {
        &self.settings
    }

    /// The active weekday template.
    pub fn template(&self) -> &WeekdayTemplate {
        &self.settings.periods
    }

    /// The active holiday calendar.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Years whose schedule is currently cached, ascending.
    pub fn cached_years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.cache.borrow().keys().copied().collect();
        years.sort_unstable();
        years
    }

    // ── Updates ───────────────────────────────────────────────────────────────

    /// Replace the weekday template and threshold.
    ///
    /// Every cached year schedule is discarded.
    pub fn update_settings(&mut self, settings: PeriodSettings) {
        info!(
            periods = ?settings.periods.as_array(),
            weekly = settings.periods.weekly_total(),
            percentage = %settings.percentage,
            "schedule settings updated"
        );
        if settings.periods.is_empty() {
            warn!("weekday template holds no periods; thresholds cannot be reached");
        }
        self.settings = settings;
        self.invalidate();
    }

    /// Replace the holiday calendar.
    ///
    /// Every cached year schedule is discarded.
    pub fn update_holidays(&mut self, calendar: impl HolidayCalendar + 'static) {
        info!(calendar = calendar.name(), "holiday calendar updated");
        self.calendar = Box::new(calendar);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        let cache = self.cache.get_mut();
        if !cache.is_empty() {
            debug!(years = cache.len(), "clearing year schedule cache");
        }
        cache.clear();
    }

    // ── Lookups ───────────────────────────────────────────────────────────────

    /// The schedule for `year`, built and cached on first use.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported date range.
    pub fn year_schedule(&self, year: u16) -> Result<Rc<YearSchedule>> {
        Ok(self.schedule_containing(Date::start_of_year(year)?))
    }

    /// Periods held on `date`, holidays applied.
    pub fn periods_on_date(&self, date: Date) -> DailyPeriods {
        self.schedule_containing(date)
            .periods_on(date.month(), date.day_of_month())
            .unwrap_or(0)
    }

    fn schedule_containing(&self, date: Date) -> Rc<YearSchedule> {
        let year = date.year();
        if let Some(schedule) = self.cache.borrow().get(&year) {
            return Rc::clone(schedule);
        }
        debug!(year, calendar = self.calendar.name(), "building year schedule");
        let schedule = Rc::new(YearSchedule::from_first_day(
            date.first_of_year(),
            &self.settings.periods,
            self.calendar.as_ref(),
        ));
        self.cache.borrow_mut().insert(year, Rc::clone(&schedule));
        schedule
    }
}

impl Default for ScheduleModel {
    fn default() -> Self {
        Self::with_settings(PeriodSettings::default())
    }
}

impl PeriodSource for ScheduleModel {
    fn periods_on_date(&self, date: Date) -> DailyPeriods {
        ScheduleModel::periods_on_date(self, date)
    }

    fn required_percentage(&self) -> RequiredPercentage {
        self.settings.percentage
    }

    fn periods_in_year_span(&self, first: Date, last: Date) -> PeriodCount {
        if first > last {
            return 0;
        }
        self.schedule_containing(first).periods_between(first, last)
    }

    fn never_holds_periods(&self) -> bool {
        self.settings.periods.is_empty()
    }
}
