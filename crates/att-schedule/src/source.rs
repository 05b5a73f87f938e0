//! `PeriodSource`: the per-day lookup the accounting engine is built on.

use att_core::{DailyPeriods, PeriodCount};
use att_time::Date;

use crate::settings::RequiredPercentage;

/// Anything that can say how many periods are held on a date.
///
/// Range sums and the forward search only need this trait, so they can be
/// run against a [`ScheduleModel`](crate::ScheduleModel) or any stub.
pub trait PeriodSource {
    /// Periods held on `date`, holidays applied.
    fn periods_on_date(&self, date: Date) -> DailyPeriods;

    /// The attendance threshold in force.
    fn required_percentage(&self) -> RequiredPercentage;

    /// Periods held from `first` to `last` inclusive, where both dates lie in
    /// the same calendar year. Zero when `first > last`.
    ///
    /// The default walks the span one day at a time.
    fn periods_in_year_span(&self, first: Date, last: Date) -> PeriodCount {
        first
            .range_to(last)
            .map(|d| self.periods_on_date(d) as PeriodCount)
            .sum()
    }

    /// `true` if no date can ever hold a period. The default is `false`.
    fn never_holds_periods(&self) -> bool {
        false
    }
}

impl<T: PeriodSource + ?Sized> PeriodSource for &T {
    fn periods_on_date(&self, date: Date) -> DailyPeriods {
        (**self).periods_on_date(date)
    }

    fn required_percentage(&self) -> RequiredPercentage {
        (**self).required_percentage()
    }

    fn periods_in_year_span(&self, first: Date, last: Date) -> PeriodCount {
        (**self).periods_in_year_span(first, last)
    }

    fn never_holds_periods(&self) -> bool {
        (**self).never_holds_periods()
    }
}
