//! Simulate command implementation

use tracing::info;

use att_accounting::{AttendanceConfig, LeaveRequest};
use att_time::Date;

use super::{print_report, ModeArg, StateArgs, UnitArg};
use crate::Result;

/// Run the simulate command
pub fn run(
    config: &AttendanceConfig,
    state: StateArgs,
    reference: Date,
    mode: ModeArg,
    unit: UnitArg,
    amount: u32,
) -> Result<()> {
    let state = state.state()?;
    let request = LeaveRequest::new(mode.into(), unit.into(), amount);
    let accountant = config.accountant()?;
    let leave = accountant.leave_periods(reference, request)?;
    info!(?request, %reference, leave, "simulating leave");

    let report = accountant.simulate_leave(state, reference, request)?;
    println!("Leave: {leave} period(s)");
    print_report(&report);
    Ok(())
}
