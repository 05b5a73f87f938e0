//! Report command implementation

use tracing::info;

use att_accounting::AttendanceConfig;
use att_time::Date;

use super::{print_report, StateArgs};
use crate::{CliError, Result};

/// Run the report command
pub fn run(config: &AttendanceConfig, state: StateArgs, start: Date, end: Date) -> Result<()> {
    if start > end {
        return Err(CliError::InvalidArgument(format!(
            "--start {start} is after --end {end}"
        )));
    }
    let state = state.state()?;
    info!(%start, %end, "generating attendance report");
    let report = config.accountant()?.report(state, start, end)?;
    print_report(&report);
    Ok(())
}
