//! Joint calendar: combines two or more holiday calendars.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use att_core::ensure;
use att_core::errors::Result;

/// Rule for combining multiple calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointCalendarRule {
    /// A day is a holiday if it is a holiday in **any** of the constituent
    /// calendars (union of holiday sets).
    JoinHolidays,
    /// A day is a holiday only if it is a holiday in **all** constituent
    /// calendars (intersection of holiday sets).
    CommonHolidays,
}

/// A calendar that combines multiple calendars according to a
/// [`JointCalendarRule`].
pub struct JointCalendar {
    calendars: Vec<Box<dyn HolidayCalendar>>,
    rule: JointCalendarRule,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish()
    }
}

impl JointCalendar {
    /// Create a new joint calendar from a list of calendars and a combination
    /// rule.
    ///
    /// # Errors
    /// Returns an error if `calendars` is empty.
    pub fn new(calendars: Vec<Box<dyn HolidayCalendar>>, rule: JointCalendarRule) -> Result<Self> {
        ensure!(
            !calendars.is_empty(),
            "JointCalendar requires at least one calendar"
        );
        let names: Vec<&str> = calendars.iter().map(|c| c.name()).collect();
        let joiner = match rule {
            JointCalendarRule::JoinHolidays => " + ",
            JointCalendarRule::CommonHolidays => " & ",
        };
        let name = names.join(joiner);
        Ok(Self {
            calendars,
            rule,
            name,
        })
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        match self.rule {
            JointCalendarRule::JoinHolidays => self.calendars.iter().any(|c| c.is_holiday(date)),
            JointCalendarRule::CommonHolidays => self.calendars.iter().all(|c| c.is_holiday(date)),
        }
    }
}
