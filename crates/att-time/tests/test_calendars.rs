//! Integration tests for the `HolidayCalendar` trait and its generic
//! implementations.

use att_time::{BespokeCalendar, Date, HolidayCalendar, JointCalendar, JointCalendarRule, NoHolidays};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that the holidays listed by `cal` in `[from, to]` are exactly
/// `expected`.
fn check_holidays(cal: &dyn HolidayCalendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = cal.holidays_between(from, to);
    assert_eq!(
        calculated,
        expected,
        "{}: holiday list mismatch between {from} and {to}",
        cal.name()
    );
}

#[test]
fn bespoke_holidays_listed_in_order() {
    let mut cal = BespokeCalendar::new("Semester");
    cal.add_holiday(date(2024, 11, 15));
    cal.add_holiday(date(2024, 11, 5));
    cal.add_holiday(date(2025, 1, 1));
    check_holidays(
        &cal,
        date(2024, 11, 1),
        date(2024, 12, 31),
        &[date(2024, 11, 5), date(2024, 11, 15)],
    );
}

#[test]
fn joint_calendar_default_listing_matches_union() {
    let autumn = BespokeCalendar::with_holidays("Autumn", [date(2024, 10, 1), date(2024, 10, 2)]);
    let festival = BespokeCalendar::with_holidays("Festival", [date(2024, 10, 2), date(2024, 10, 20)]);
    let cal = JointCalendar::new(
        vec![Box::new(autumn), Box::new(festival), Box::new(NoHolidays)],
        JointCalendarRule::JoinHolidays,
    )
    .unwrap();
    check_holidays(
        &cal,
        date(2024, 10, 1),
        date(2024, 10, 31),
        &[date(2024, 10, 1), date(2024, 10, 2), date(2024, 10, 20)],
    );
}

#[test]
fn common_holidays_with_no_holidays_is_empty() {
    let autumn = BespokeCalendar::with_holidays("Autumn", [date(2024, 10, 1)]);
    let cal = JointCalendar::new(
        vec![Box::new(autumn), Box::new(NoHolidays)],
        JointCalendarRule::CommonHolidays,
    )
    .unwrap();
    check_holidays(&cal, date(2024, 1, 1), date(2024, 12, 31), &[]);
}
