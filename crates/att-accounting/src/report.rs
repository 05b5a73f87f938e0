//! `AttendanceReport`: derived figures for one attendance state.

use att_core::{PeriodBalance, PeriodCount, Percentage};
use att_schedule::RequiredPercentage;

use crate::accountant::RequiredDate;
use crate::state::AttendanceState;

/// Where a state stands relative to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standing {
    /// Attendance is below the required percentage.
    BelowRequirement,
    /// At or above the requirement with this many periods to spare.
    CanMiss(PeriodCount),
    /// At or above the requirement with no periods to spare.
    OnTrack,
}

/// Figures shown after a calculation or a leave simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceReport {
    /// Counts the report was computed from.
    pub state: AttendanceState,
    /// Threshold in force.
    pub required: RequiredPercentage,
    /// Attendance on the 0–100 scale.
    pub percentage: Percentage,
    /// Minimum attended periods for the current total.
    pub periods_to_maintain: PeriodCount,
    /// Attended minus `periods_to_maintain`.
    pub buffer: PeriodBalance,
    /// Forward-search outcome.
    pub required_date: RequiredDate,
    /// Summary classification.
    pub standing: Standing,
}

impl AttendanceReport {
    /// Derive the report figures. `state` must have a non-zero total.
    pub(crate) fn new(
        state: AttendanceState,
        required: RequiredPercentage,
        required_date: RequiredDate,
    ) -> Self {
        let buffer = state.buffer(required);
        let standing = if !state.meets(required) {
            Standing::BelowRequirement
        } else if buffer > 0 {
            Standing::CanMiss(buffer as PeriodCount)
        } else {
            Standing::OnTrack
        };
        Self {
            state,
            required,
            percentage: state.percentage().unwrap_or(0.0),
            periods_to_maintain: state.periods_to_maintain(required),
            buffer,
            required_date,
            standing,
        }
    }

    /// One-line human-readable summary.
    pub fn message(&self) -> String {
        match (self.standing, self.required_date) {
            (Standing::BelowRequirement, RequiredDate::ReachableOn(date)) => format!(
                "You must attend every period until {date} to reach {}.",
                self.required
            ),
            (Standing::BelowRequirement, _) => format!(
                "You may not reach {} attendance within the search horizon.",
                self.required
            ),
            (Standing::CanMiss(n), _) => format!("You can miss {n} period(s)."),
            (Standing::OnTrack, _) => "You're on track! Keep it up.".to_string(),
        }
    }
}
