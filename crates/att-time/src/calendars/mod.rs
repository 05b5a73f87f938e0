//! Generic holiday calendars.

/// Calendar built from explicit holiday dates.
pub mod bespoke_calendar;

/// Union / intersection of several calendars.
pub mod joint_calendar;
