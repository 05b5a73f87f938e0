//! Schedule settings: the weekday template and the required percentage.

use serde::{Deserialize, Serialize};

use att_core::errors::{Error, Result};
use att_core::{DailyPeriods, PeriodCount, Percentage};
use att_time::Weekday;

/// Periods held on each day of the week, indexed Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayTemplate([DailyPeriods; 7]);

impl WeekdayTemplate {
    /// Create a template from per-weekday counts, Sunday first.
    pub const fn new(periods: [DailyPeriods; 7]) -> Self {
        Self(periods)
    }

    /// Periods held on `weekday`.
    pub fn periods_on(&self, weekday: Weekday) -> DailyPeriods {
        self.0[weekday.index()]
    }

    /// Return a copy with `weekday` set to `periods`.
    pub fn with(mut self, weekday: Weekday, periods: DailyPeriods) -> Self {
        self.0[weekday.index()] = periods;
        self
    }

    /// The raw counts, Sunday first.
    pub fn as_array(&self) -> &[DailyPeriods; 7] {
        &self.0
    }

    /// Periods held in a full week without holidays.
    pub fn weekly_total(&self) -> PeriodCount {
        self.0.iter().map(|&p| p as PeriodCount).sum()
    }

    /// `true` if no periods are held on any weekday.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&p| p == 0)
    }
}

impl Default for WeekdayTemplate {
    fn default() -> Self {
        Self([0, 6, 7, 8, 7, 6, 7])
    }
}

impl From<[DailyPeriods; 7]> for WeekdayTemplate {
    fn from(periods: [DailyPeriods; 7]) -> Self {
        Self(periods)
    }
}

/// Minimum attendance percentage, in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RequiredPercentage(Percentage);

impl RequiredPercentage {
    /// Create a threshold.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] unless `value` is a finite number in
    /// `[0, 100]`.
    pub fn new(value: Percentage) -> Result<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(Error::InvalidArgument(format!(
                "required percentage {value} out of range [0, 100]"
            )));
        }
        Ok(Self(value))
    }

    /// The threshold on the 0–100 scale.
    pub fn value(&self) -> Percentage {
        self.0
    }

    /// The threshold as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// `true` if `attended / total` reaches the threshold.
    ///
    /// Always `false` when `total` is zero: the ratio cannot be evaluated.
    pub fn is_met_by(&self, attended: PeriodCount, total: PeriodCount) -> bool {
        total > 0 && attended as f64 * 100.0 >= self.0 * total as f64
    }
}

impl Default for RequiredPercentage {
    fn default() -> Self {
        Self(75.0)
    }
}

impl TryFrom<f64> for RequiredPercentage {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RequiredPercentage> for f64 {
    fn from(p: RequiredPercentage) -> f64 {
        p.0
    }
}

impl std::fmt::Display for RequiredPercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The user-editable settings object: weekday template plus threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSettings {
    /// Periods per weekday, Sunday first.
    pub periods: WeekdayTemplate,
    /// Minimum attendance percentage.
    pub percentage: RequiredPercentage,
}

impl PeriodSettings {
    /// Create settings from a template and a threshold.
    pub fn new(periods: WeekdayTemplate, percentage: RequiredPercentage) -> Self {
        Self {
            periods,
            percentage,
        }
    }
}
