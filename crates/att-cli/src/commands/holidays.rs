//! Holidays command implementation

use att_accounting::AttendanceConfig;
use att_time::{Date, HolidayCalendar};

use crate::Result;

/// Run the holidays command
pub fn run(config: &AttendanceConfig, year: u16) -> Result<()> {
    let calendar = config.holiday_calendar()?;
    let first = Date::start_of_year(year)?;
    let holidays = calendar.holidays_between(first, first.last_of_year());

    println!("{} holiday(s) in {year} ({})", holidays.len(), calendar.name());
    for day in holidays {
        println!("  {day}  {}", day.weekday());
    }
    Ok(())
}
