//! `PeriodAccountant`: range sums and the forward search.
//!
//! Both operations are pure functions of their arguments and of the
//! [`PeriodSource`] the accountant wraps.

use tracing::debug;

use att_core::errors::{Error, Result};
use att_core::PeriodCount;
use att_schedule::{PeriodSource, RequiredPercentage};
use att_time::Date;

use crate::horizon::SearchHorizon;
use crate::report::AttendanceReport;
use crate::state::AttendanceState;

/// Outcome of [`PeriodAccountant::find_required_attendance_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredDate {
    /// The threshold is satisfied by the current counts; nothing was searched.
    AlreadyMet,
    /// Attending every period from the start date through this date reaches
    /// the threshold, and no earlier date does.
    ReachableOn(Date),
    /// Full attendance does not reach the threshold within the horizon.
    Unreachable,
}

impl RequiredDate {
    /// The date, if one was found. `AlreadyMet` and `Unreachable` both map to
    /// `None`.
    pub fn date(&self) -> Option<Date> {
        match self {
            RequiredDate::ReachableOn(d) => Some(*d),
            RequiredDate::AlreadyMet | RequiredDate::Unreachable => None,
        }
    }
}

/// Period accounting over a [`PeriodSource`].
///
/// `S` is usually a [`ScheduleModel`](att_schedule::ScheduleModel), owned or
/// borrowed.
#[derive(Debug, Clone)]
pub struct PeriodAccountant<S> {
    source: S,
    horizon: SearchHorizon,
}

impl<S: PeriodSource> PeriodAccountant<S> {
    /// Wrap `source` with the default two-year search horizon.
    pub fn new(source: S) -> Self {
        Self::with_horizon(source, SearchHorizon::default())
    }

    /// Wrap `source` with an explicit search horizon.
    pub fn with_horizon(source: S, horizon: SearchHorizon) -> Self {
        Self { source, horizon }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the wrapped source, e.g. to update settings.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The forward search bound.
    pub fn horizon(&self) -> SearchHorizon {
        self.horizon
    }

    /// The threshold of the wrapped source.
    pub fn required_percentage(&self) -> RequiredPercentage {
        self.source.required_percentage()
    }

    // ── Range sums ────────────────────────────────────────────────────────────

    /// Periods held from `start` to `end`, both inclusive.
    ///
    /// Zero when `start > end`. Ranges spanning several years are summed one
    /// calendar year at a time, each against that year's own schedule.
    pub fn periods_in_range(&self, start: Date, end: Date) -> PeriodCount {
        let mut total = 0;
        let mut first = start;
        while first <= end {
            let last = first.last_of_year().min(end);
            total += self.source.periods_in_year_span(first, last);
            match last.succ() {
                Some(next) => first = next,
                None => break,
            }
        }
        total
    }

    /// Same as [`periods_in_range`](Self::periods_in_range), one day at a
    /// time. This is the reference the sliced sum must agree with.
    pub fn periods_in_range_per_day(&self, start: Date, end: Date) -> PeriodCount {
        start
            .range_to(end)
            .map(|d| self.source.periods_on_date(d) as PeriodCount)
            .sum()
    }

    // ── Forward search ────────────────────────────────────────────────────────

    /// First date on which attending every period from `from` onward brings
    /// `attended / total` up to the required percentage.
    ///
    /// This is a projection under full attendance, not a guarantee. The ratio
    /// is checked after every day up to the horizon limit, since a day's
    /// periods do not always raise it; checks with a zero total are skipped.
    pub fn find_required_attendance_date(
        &self,
        attended: PeriodCount,
        total: PeriodCount,
        from: Date,
    ) -> RequiredDate {
        let required = self.source.required_percentage();
        if required.is_met_by(attended, total) {
            return RequiredDate::AlreadyMet;
        }
        if self.source.never_holds_periods() {
            debug!(%from, "no periods are ever held; threshold unreachable");
            return RequiredDate::Unreachable;
        }

        let limit = self.horizon.limit(from);
        let (mut attended, mut total) = (attended, total);
        for day in from.range_to(limit) {
            let today = self.source.periods_on_date(day) as PeriodCount;
            attended = attended.saturating_add(today);
            total = total.saturating_add(today);
            if required.is_met_by(attended, total) {
                debug!(%from, reached = %day, "attendance threshold reachable");
                return RequiredDate::ReachableOn(day);
            }
        }
        debug!(%from, %limit, "attendance threshold unreachable within horizon");
        RequiredDate::Unreachable
    }

    // ── Reports ───────────────────────────────────────────────────────────────

    /// Report after attending every period from `start` to `end`.
    ///
    /// The range's periods are added to both counts of `state`; the required
    /// date is searched from the day after `end`.
    ///
    /// # Errors
    /// Returns [`Error::NoPeriods`] if the resulting total is zero.
    pub fn report(
        &self,
        state: AttendanceState,
        start: Date,
        end: Date,
    ) -> Result<AttendanceReport> {
        let state = state.attending(self.periods_in_range(start, end));
        self.assess_after(state, end)
    }

    /// Report on `state` as it stands, searching forward from `from`.
    ///
    /// # Errors
    /// Returns [`Error::NoPeriods`] if `state` has a zero total.
    pub fn assess(&self, state: AttendanceState, from: Date) -> Result<AttendanceReport> {
        if state.total() == 0 {
            return Err(Error::NoPeriods);
        }
        let required_date =
            self.find_required_attendance_date(state.attended(), state.total(), from);
        Ok(AttendanceReport::new(
            state,
            self.source.required_percentage(),
            required_date,
        ))
    }

    /// Report on `state` whose periods are counted through `last`; the
    /// search starts the day after. At [`Date::MAX`] there is no day left,
    /// so an unmet threshold is [`RequiredDate::Unreachable`].
    pub(crate) fn assess_after(
        &self,
        state: AttendanceState,
        last: Date,
    ) -> Result<AttendanceReport> {
        if let Some(from) = last.succ() {
            return self.assess(state, from);
        }
        if state.total() == 0 {
            return Err(Error::NoPeriods);
        }
        let required = self.source.required_percentage();
        let required_date = if state.meets(required) {
            RequiredDate::AlreadyMet
        } else {
            RequiredDate::Unreachable
        };
        Ok(AttendanceReport::new(state, required, required_date))
    }
}
