//! # att-time
//!
//! Date, weekday, month, and holiday-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the holiday-free calendar.
pub mod calendar;

/// Generic holiday calendars (bespoke date lists, joint calendars).
pub mod calendars;

/// `Date` type and `DateRange` iterator.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week, Sunday first.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use calendars::joint_calendar::{JointCalendar, JointCalendarRule};
pub use date::{days_in_month, is_leap_year, Date, DateRange};
pub use month::Month;
pub use weekday::Weekday;
