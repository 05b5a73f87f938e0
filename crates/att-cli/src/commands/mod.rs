//! CLI command implementations
//!
//! Each submodule implements one subcommand. Shared argument groups and
//! output helpers live here.

use chrono::Datelike;
use clap::{Args, ValueEnum};

use att_accounting::{AttendanceReport, AttendanceState, LeaveMode, LeaveUnit, RequiredDate};
use att_time::Date;

use crate::{CliError, Result};

pub mod advise;
pub mod holidays;
pub mod periods;
pub mod report;
pub mod required_date;
pub mod simulate;

/// Attended and total periods so far.
#[derive(Debug, Clone, Copy, Args)]
pub struct StateArgs {
    /// Periods attended
    #[arg(long)]
    pub attended: u64,

    /// Periods held
    #[arg(long)]
    pub total: u64,
}

impl StateArgs {
    pub fn state(self) -> Result<AttendanceState> {
        Ok(AttendanceState::new(self.attended, self.total)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Leave already taken
    Retroactive,
    /// Leave still to come
    Prospective,
}

impl From<ModeArg> for LeaveMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Retroactive => LeaveMode::Retroactive,
            ModeArg::Prospective => LeaveMode::Prospective,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Days,
    Periods,
}

impl From<UnitArg> for LeaveUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Days => LeaveUnit::Days,
            UnitArg::Periods => LeaveUnit::Periods,
        }
    }
}

/// Today's local date.
pub fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year())
        .map_err(|_| CliError::InvalidArgument(format!("system date {now} is out of range")))?;
    // month() and day() are at most 12 and 31.
    Ok(Date::from_ymd(year, now.month() as u8, now.day() as u8)?)
}

pub fn describe_required_date(required_date: RequiredDate) -> String {
    match required_date {
        RequiredDate::AlreadyMet => "already met".to_string(),
        RequiredDate::ReachableOn(date) => format!("{date} ({})", date.weekday()),
        RequiredDate::Unreachable => "not reachable within the search horizon".to_string(),
    }
}

pub fn print_report(report: &AttendanceReport) {
    println!(
        "Attended:            {} / {}",
        report.state.attended(),
        report.state.total()
    );
    println!("Attendance:          {:.2}%", report.percentage);
    println!("Required:            {}", report.required);
    println!("Periods to maintain: {}", report.periods_to_maintain);
    println!("Buffer:              {}", report.buffer);
    println!(
        "Required date:       {}",
        describe_required_date(report.required_date)
    );
    println!();
    println!("{}", report.message());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_args_are_validated() {
        let ok = StateArgs {
            attended: 3,
            total: 4,
        };
        assert_eq!(ok.state().unwrap(), AttendanceState::new(3, 4).unwrap());
        let bad = StateArgs {
            attended: 5,
            total: 4,
        };
        assert!(matches!(bad.state(), Err(CliError::Attendance(_))));
    }

    #[test]
    fn required_date_descriptions() {
        let friday = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(
            describe_required_date(RequiredDate::ReachableOn(friday)),
            "2024-01-05 (Friday)"
        );
        assert_eq!(describe_required_date(RequiredDate::AlreadyMet), "already met");
    }

    #[test]
    fn today_is_representable() {
        assert!(today().is_ok());
    }
}
