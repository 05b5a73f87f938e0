//! # att-schedule
//!
//! The schedule model: how many periods are held on any calendar date.
//!
//! A [`WeekdayTemplate`] gives the periods held on each day of the week, a
//! holiday calendar (by default the fixed [`HolidayTable`]) zeroes out
//! exception days, and [`ScheduleModel`] derives and caches one
//! [`YearSchedule`] per calendar year from the two.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Recurring month/day holiday table.
pub mod holiday_table;

/// `ScheduleModel`: settings owner and per-year cache.
pub mod model;

/// Weekday template, required percentage, and the settings object.
pub mod settings;

/// `PeriodSource`: per-day period lookup consumed by the accounting engine.
pub mod source;

/// `YearSchedule`: per-day period counts for one calendar year.
pub mod year_schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use holiday_table::HolidayTable;
pub use model::ScheduleModel;
pub use settings::{PeriodSettings, RequiredPercentage, WeekdayTemplate};
pub use source::PeriodSource;
pub use year_schedule::YearSchedule;
