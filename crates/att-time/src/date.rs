//! `Date` type and the inclusive [`DateRange`] iterator.
//!
//! Dates are calendar days with no time-of-day or timezone, stored as a
//! serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::weekday::Weekday;
use att_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
///
/// Serialized as its `YYYY-MM-DD` string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// January 1 of `year`.
    pub fn start_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn end_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday, so serial 0 would be a Sunday.
        Weekday::ALL[self.0.rem_euclid(7) as usize]
    }

    /// January 1 of this date's year.
    pub fn first_of_year(&self) -> Date {
        Date(self.0 - self.day_of_year() as i32 + 1)
    }

    /// December 31 of this date's year.
    pub fn last_of_year(&self) -> Date {
        Date(serial_from_ymd(self.year(), 12, 31))
    }

    /// Return `true` if this date falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative to go back). Returns an error if the
    /// result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow adding {n} days")))?;
        Self::from_serial(serial)
    }

    /// Advance by `n` days, clamping to [`Date::MIN`]/[`Date::MAX`].
    pub fn saturating_add_days(self, n: i32) -> Self {
        Date(self.0.saturating_add(n).clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The following day, or `None` at [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then(|| Date(self.0 + 1))
    }

    /// The preceding day, or `None` at [`Date::MIN`].
    pub fn pred(self) -> Option<Self> {
        (self > Self::MIN).then(|| Date(self.0 - 1))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Iterate every date from `self` to `end`, both inclusive.
    ///
    /// The range is empty when `self > end`.
    pub fn range_to(self, end: Date) -> DateRange {
        DateRange {
            next: self.0,
            last: end.0,
        }
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Date(format!("'{s}' is not a YYYY-MM-DD date"));
        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(malformed);
        let year = next()?.parse::<u16>().map_err(|_| malformed())?;
        let month = next()?.parse::<u8>().map_err(|_| malformed())?;
        let day = next()?.parse::<u8>().map_err(|_| malformed())?;
        Date::from_ymd(year, month, day)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// Inclusive iterator over consecutive calendar dates.
///
/// Created by [`Date::range_to`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: i32,
    last: i32,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let d = Date(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month (1–12) of `year`.
///
/// Returns 0 for a month number outside 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    Month::from_number(month).map_or(0, |m| m.days_in(year))
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a serial number. Inputs are not validated.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Whole years since 1900, plus the leap days they contain.
    let mut serial = (y - 1900) * 365 + (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // No year is longer than 366 days, so this never overshoots.
    let mut year = (1900 + (serial - 1) / 366) as u16;
    while serial_from_ymd(year + 1, 1, 1) <= serial {
        year += 1;
    }
    let mut remaining = serial - serial_from_ymd(year, 1, 1) + 1;
    let mut month = 1u8;
    while remaining > days_in_month(year, month) as i32 {
        remaining -= days_in_month(year, month) as i32;
        month += 1;
    }
    (year, month, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
