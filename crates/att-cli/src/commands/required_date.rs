//! Required-date command implementation

use tracing::info;

use att_accounting::AttendanceConfig;
use att_time::Date;

use super::{describe_required_date, StateArgs};
use crate::Result;

/// Run the required-date command
pub fn run(config: &AttendanceConfig, state: StateArgs, from: Date) -> Result<()> {
    let state = state.state()?;
    let accountant = config.accountant()?;
    info!(
        attended = state.attended(),
        total = state.total(),
        %from,
        horizon = ?accountant.horizon(),
        "searching for required attendance date"
    );
    let found = accountant.find_required_attendance_date(state.attended(), state.total(), from);
    println!(
        "Reaching {}: {}",
        accountant.required_percentage(),
        describe_required_date(found)
    );
    Ok(())
}
