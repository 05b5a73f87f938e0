//! Leave simulation.
//!
//! Retroactive leave turns periods already counted as attended into misses.
//! Prospective leave adds future periods to the total without attending them.
//! Either way the result is a fresh [`AttendanceReport`].

use tracing::debug;

use att_core::errors::{Error, Result};
use att_core::PeriodCount;
use att_schedule::PeriodSource;
use att_time::Date;

use crate::accountant::PeriodAccountant;
use crate::report::AttendanceReport;
use crate::state::AttendanceState;

/// When the leave is taken relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveMode {
    /// Leave already taken: the periods were counted as attended and are
    /// now missed.
    Retroactive,
    /// Leave still to come: the periods are added to the total only.
    Prospective,
}

/// How the leave amount is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveUnit {
    /// Calendar days, converted to periods through the schedule.
    Days,
    /// Periods directly.
    Periods,
}

/// A leave scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeaveRequest {
    /// Retroactive or prospective.
    pub mode: LeaveMode,
    /// Days or periods.
    pub unit: LeaveUnit,
    /// Number of days or periods; must be positive.
    pub amount: u32,
}

impl LeaveRequest {
    /// Create a request.
    pub fn new(mode: LeaveMode, unit: LeaveUnit, amount: u32) -> Self {
        Self { mode, unit, amount }
    }

    fn days(&self) -> i32 {
        i32::try_from(self.amount).unwrap_or(i32::MAX)
    }
}

impl<S: PeriodSource> PeriodAccountant<S> {
    /// Periods covered by `request` around `reference`.
    ///
    /// Retroactive days run from `reference` for `amount` days; prospective
    /// days start the day after `reference`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `amount` is zero.
    pub fn leave_periods(&self, reference: Date, request: LeaveRequest) -> Result<PeriodCount> {
        if request.amount == 0 {
            return Err(Error::InvalidArgument(
                "leave amount must be a positive number".into(),
            ));
        }
        let amount = request.days();
        let periods = match (request.unit, request.mode) {
            (LeaveUnit::Periods, _) => request.amount as PeriodCount,
            (LeaveUnit::Days, LeaveMode::Retroactive) => {
                self.periods_in_range(reference, reference.saturating_add_days(amount - 1))
            }
            (LeaveUnit::Days, LeaveMode::Prospective) => match reference.succ() {
                Some(first) => self.periods_in_range(first, reference.saturating_add_days(amount)),
                None => 0,
            },
        };
        Ok(periods)
    }

    /// Report on `state` after taking the leave in `request`.
    ///
    /// The required date is searched from the first day after the leave.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if the amount is zero.
    /// * [`Error::LeaveExceedsAttendance`] if retroactive leave exceeds the
    ///   attended periods.
    /// * [`Error::NoPeriods`] if the resulting total is zero.
    pub fn simulate_leave(
        &self,
        state: AttendanceState,
        reference: Date,
        request: LeaveRequest,
    ) -> Result<AttendanceReport> {
        let leave = self.leave_periods(reference, request)?;
        debug!(?request, leave, %reference, "simulating leave");

        let (simulated, last_counted) = match request.mode {
            LeaveMode::Retroactive => {
                let attended = state.attended().checked_sub(leave).ok_or(
                    Error::LeaveExceedsAttendance {
                        leave,
                        attended: state.attended(),
                    },
                )?;
                (AttendanceState::new(attended, state.total())?, reference)
            }
            LeaveMode::Prospective => {
                let last_day = match request.unit {
                    LeaveUnit::Days => reference.saturating_add_days(request.days()),
                    LeaveUnit::Periods => reference,
                };
                (state.missing(leave), last_day)
            }
        };
        self.assess_after(simulated, last_counted)
    }
}
