//! `HolidayCalendar` trait and the holiday-free calendar.
//!
//! A holiday calendar only knows which dates are exceptions to the weekly
//! timetable. How many periods a non-holiday date carries is decided by the
//! schedule built on top of it.

use crate::date::Date;

/// A source of holiday exceptions.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Academic (fixed)"`).
    fn name(&self) -> &str;

    /// Return `true` if no periods are held on `date`, whatever its weekday.
    fn is_holiday(&self, date: Date) -> bool;

    /// Collect every holiday in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Date> {
        from.range_to(to).filter(|d| self.is_holiday(*d)).collect()
    }
}

/// A calendar without holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        (**self).is_holiday(date)
    }
}
