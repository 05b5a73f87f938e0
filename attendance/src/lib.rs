//! # attendance
//!
//! Class-attendance accounting: periods held per weekday, holiday
//! exceptions, range sums, and a forward search for the date a required
//! attendance percentage becomes reachable.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `att-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! attendance = "0.1"
//! ```
//!
//! ```rust
//! use attendance::accounting::{PeriodAccountant, RequiredDate};
//! use attendance::schedule::ScheduleModel;
//! use attendance::time::Date;
//!
//! let accountant = PeriodAccountant::new(ScheduleModel::default());
//! let monday = Date::from_ymd(2024, 1, 1).unwrap();
//! let sunday = Date::from_ymd(2024, 1, 7).unwrap();
//! assert_eq!(accountant.periods_in_range(monday, sunday), 41);
//!
//! // 0 of 10 attended: full attendance reaches 75% on Friday.
//! assert_eq!(
//!     accountant.find_required_attendance_date(0, 10, monday),
//!     RequiredDate::ReachableOn(Date::from_ymd(2024, 1, 5).unwrap())
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use att_core as core;

/// Dates, weekdays, months, and holiday calendars.
pub use att_time as time;

/// Weekday templates, holiday tables, and cached year schedules.
pub use att_schedule as schedule;

/// Range sums, the forward search, reports, leave, advice, configuration.
pub use att_accounting as accounting;
