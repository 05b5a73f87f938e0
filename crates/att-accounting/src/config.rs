//! TOML configuration.
//!
//! ```toml
//! horizon = { days = 730 }
//! holiday_dates = ["2024-03-15"]
//!
//! [settings]
//! periods = [0, 6, 7, 8, 7, 6, 7]
//! percentage = 75.0
//!
//! [[holidays]]
//! month_index = 11
//! day_indices = [24]
//! ```
//!
//! Every key is optional. Without a `holidays` array the fixed academic
//! table is used; an empty array means no holidays at all. `holiday_dates`
//! adds one-off dates on top of the table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use att_core::errors::{Error, Result};
use att_schedule::{HolidayTable, PeriodSettings, ScheduleModel};
use att_time::{BespokeCalendar, Date, HolidayCalendar, JointCalendar, JointCalendarRule};

use crate::accountant::PeriodAccountant;
use crate::horizon::SearchHorizon;

/// Holidays of one month, zero-based like the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayEntry {
    /// Month index, 0 = January.
    pub month_index: u8,
    /// Day indices, 0 = the 1st.
    pub day_indices: Vec<u8>,
}

/// Everything needed to build an accountant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttendanceConfig {
    /// Forward search bound.
    pub horizon: SearchHorizon,
    /// Weekday template and threshold.
    pub settings: PeriodSettings,
    /// Holiday override; `None` keeps the academic default.
    pub holidays: Option<Vec<HolidayEntry>>,
    /// One-off holidays joined with the recurring table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holiday_dates: Vec<Date>,
}

impl AttendanceConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    /// Returns [`Error::Config`] on malformed TOML, unknown keys, or
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        // Surface bad holiday indices at load time rather than on first use.
        config.holiday_table()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "loaded attendance configuration");
        Ok(config)
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// The holiday table this configuration selects.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if an entry is out of range.
    pub fn holiday_table(&self) -> Result<HolidayTable> {
        match &self.holidays {
            None => Ok(HolidayTable::academic_default()),
            Some(entries) => HolidayTable::from_entries(
                "Configured",
                entries
                    .iter()
                    .map(|e| (e.month_index, e.day_indices.iter().copied())),
            )
            .map_err(|e| Error::Config(e.to_string())),
        }
    }

    /// The recurring table, joined with `holiday_dates` when there are any.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a table entry is out of range.
    pub fn holiday_calendar(&self) -> Result<Box<dyn HolidayCalendar>> {
        let table = self.holiday_table()?;
        if self.holiday_dates.is_empty() {
            return Ok(Box::new(table));
        }
        let dates = BespokeCalendar::with_holidays(
            "Configured dates",
            self.holiday_dates.iter().copied(),
        );
        let calendars: Vec<Box<dyn HolidayCalendar>> = vec![Box::new(table), Box::new(dates)];
        let joint = JointCalendar::new(calendars, JointCalendarRule::JoinHolidays)?;
        Ok(Box::new(joint))
    }

    /// Build the schedule model.
    ///
    /// # Errors
    /// See [`holiday_table`](Self::holiday_table).
    pub fn schedule_model(&self) -> Result<ScheduleModel> {
        Ok(ScheduleModel::new(self.settings, self.holiday_calendar()?))
    }

    /// Build an accountant owning its schedule model.
    ///
    /// # Errors
    /// See [`holiday_table`](Self::holiday_table).
    pub fn accountant(&self) -> Result<PeriodAccountant<ScheduleModel>> {
        Ok(PeriodAccountant::with_horizon(
            self.schedule_model()?,
            self.horizon,
        ))
    }
}
