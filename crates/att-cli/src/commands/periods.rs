//! Periods command implementation

use tracing::info;

use att_accounting::AttendanceConfig;
use att_time::Date;

use crate::{CliError, Result};

/// Run the periods command
pub fn run(config: &AttendanceConfig, from: Date, to: Date) -> Result<()> {
    if from > to {
        return Err(CliError::InvalidArgument(format!(
            "--from {from} is after --to {to}"
        )));
    }
    let accountant = config.accountant()?;
    info!(%from, %to, "counting periods");
    let periods = accountant.periods_in_range(from, to);
    println!("{periods} period(s) from {from} to {to}");
    Ok(())
}
