//! Recurring month/day holiday table.
//!
//! Entries are zero-based `(month index, day index)` pairs and apply to every
//! year alike. The academic default is one term calendar; a year-specific
//! source can replace it through any other
//! [`HolidayCalendar`](att_time::HolidayCalendar).

use std::collections::{BTreeMap, BTreeSet};

use att_core::errors::{Error, Result};
use att_time::{Date, HolidayCalendar, Month};

/// Zero-based day indices per zero-based month index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    name: String,
    entries: BTreeMap<u8, BTreeSet<u8>>,
}

impl HolidayTable {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// The compiled-in academic table.
    pub fn academic_default() -> Self {
        const DEFAULT: [(u8, &[u8]); 6] = [
            (6, &[18]),
            (7, &[14, 16, 23, 26]),
            (8, &[4, 20, 28, 29]),
            (9, &[0, 1, 2, 3, 18, 19]),
            (10, &[4, 14]),
            (11, &[24]),
        ];
        let entries = DEFAULT
            .iter()
            .map(|(month, days)| (*month, days.iter().copied().collect()))
            .collect();
        Self {
            name: "Academic (fixed)".into(),
            entries,
        }
    }

    /// Build a table from `(month index, day indices)` pairs.
    pub fn from_entries<I, D>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, D)>,
        D: IntoIterator<Item = u8>,
    {
        let mut table = Self::new(name);
        for (month_index, days) in entries {
            for day_index in days {
                table.insert(month_index, day_index)?;
            }
        }
        Ok(table)
    }

    /// Add a holiday. Returns `false` if it was already present.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `month_index > 11` or
    /// `day_index > 30`.
    pub fn insert(&mut self, month_index: u8, day_index: u8) -> Result<bool> {
        if month_index > 11 {
            return Err(Error::InvalidArgument(format!(
                "holiday month index {month_index} out of range [0, 11]"
            )));
        }
        if day_index > 30 {
            return Err(Error::InvalidArgument(format!(
                "holiday day index {day_index} out of range [0, 30]"
            )));
        }
        Ok(self.entries.entry(month_index).or_default().insert(day_index))
    }

    /// Remove a holiday. Returns `false` if it was not present.
    pub fn remove(&mut self, month_index: u8, day_index: u8) -> bool {
        let Some(days) = self.entries.get_mut(&month_index) else {
            return false;
        };
        let removed = days.remove(&day_index);
        if days.is_empty() {
            self.entries.remove(&month_index);
        }
        removed
    }

    /// `true` if the zero-based pair is a holiday.
    pub fn contains(&self, month_index: u8, day_index: u8) -> bool {
        self.entries
            .get(&month_index)
            .is_some_and(|days| days.contains(&day_index))
    }

    /// Holiday day indices for `month`, ascending.
    pub fn day_indices(&self, month: Month) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .get(&(month.index() as u8))
            .into_iter()
            .flat_map(|days| days.iter().copied())
    }

    /// Iterate `(month index, day index)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.entries
            .iter()
            .flat_map(|(&month, days)| days.iter().map(move |&day| (month, day)))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::academic_default()
    }
}

impl HolidayCalendar for HolidayTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.contains(date.month().index() as u8, date.day_of_month() - 1)
    }
}
