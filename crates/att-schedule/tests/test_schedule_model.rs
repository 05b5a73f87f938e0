//! Integration tests for `ScheduleModel`, `YearSchedule` and `HolidayTable`.

use att_core::DailyPeriods;
use att_schedule::{
    HolidayTable, PeriodSettings, PeriodSource, RequiredPercentage, ScheduleModel, WeekdayTemplate,
};
use att_time::{BespokeCalendar, Date, Month, NoHolidays, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Wraps a model but keeps the trait's per-day span sum.
struct PerDay<'a>(&'a ScheduleModel);

impl PeriodSource for PerDay<'_> {
    fn periods_on_date(&self, date: Date) -> DailyPeriods {
        self.0.periods_on_date(date)
    }

    fn required_percentage(&self) -> RequiredPercentage {
        self.0.settings().percentage
    }
}

// ─── Leap years ───────────────────────────────────────────────────────────────

#[test]
fn february_29_lookup_follows_leap_rule() {
    let model = ScheduleModel::default();
    for (year, leap) in [(2000, true), (2004, true), (2023, false), (2100, false)] {
        let schedule = model.year_schedule(year).unwrap();
        assert_eq!(
            schedule.periods_on(Month::February, 29).is_some(),
            leap,
            "Feb 29 lookup in {year}"
        );
        assert_eq!(Date::from_ymd(year, 2, 29).is_ok(), leap);
    }
    // 2000-02-29 is a Tuesday.
    assert_eq!(model.periods_on_date(date(2000, 2, 29)), 7);
}

#[test]
fn year_totals_follow_weekday_counts() {
    let model = ScheduleModel::new(PeriodSettings::default(), NoHolidays);
    // 2023 starts on a Sunday: 53 Sundays, 52 of every other weekday.
    assert_eq!(model.year_schedule(2023).unwrap().total(), 52 * 41);
    // 2024 is a leap year starting on a Monday: 53 Mondays and Tuesdays.
    assert_eq!(model.year_schedule(2024).unwrap().total(), 52 * 41 + 6 + 7);
}

// ─── Holidays ─────────────────────────────────────────────────────────────────

#[test]
fn holiday_overrides_weekday_template() {
    let model = ScheduleModel::default();
    let d = date(2024, 7, 19);
    assert_eq!(d.weekday(), Weekday::Friday);
    assert!(model.template().periods_on(Weekday::Friday) > 0);
    assert_eq!(model.periods_on_date(d), 0);
}

#[test]
fn holiday_table_is_year_invariant() {
    let model = ScheduleModel::default();
    for year in [2023, 2024, 2025, 2030] {
        for (month_index, day_index) in HolidayTable::academic_default().iter() {
            let d = date(year, month_index + 1, day_index + 1);
            assert_eq!(model.periods_on_date(d), 0, "{d} should be a holiday");
        }
    }
}

#[test]
fn bespoke_calendar_replaces_table() {
    let mut model = ScheduleModel::default();
    model.update_holidays(BespokeCalendar::with_holidays("Term 2024", [date(2024, 1, 1)]));
    assert_eq!(model.periods_on_date(date(2024, 1, 1)), 0);
    assert_eq!(model.periods_on_date(date(2025, 1, 1)), 8);
    assert_eq!(model.periods_on_date(date(2024, 7, 19)), 6);
}

// ─── Settings ─────────────────────────────────────────────────────────────────

#[test]
fn settings_update_changes_cached_year() {
    let mut model = ScheduleModel::default();
    let wednesday = date(2024, 1, 3);
    assert_eq!(model.periods_on_date(wednesday), 8);
    assert_eq!(model.cached_years(), vec![2024]);

    model.update_settings(PeriodSettings::new(
        WeekdayTemplate::new([1, 1, 1, 1, 1, 1, 1]),
        RequiredPercentage::new(80.0).unwrap(),
    ));
    assert_eq!(model.periods_on_date(wednesday), 1);
    assert_eq!(model.required_percentage().value(), 80.0);
}

#[test]
fn lookups_are_idempotent() {
    let model = ScheduleModel::default();
    let d = date(2024, 9, 12);
    let first = model.periods_on_date(d);
    for _ in 0..3 {
        assert_eq!(model.periods_on_date(d), first);
    }
}

// ─── Month slicing vs per-day reference ──────────────────────────────────────

proptest! {
    #[test]
    fn sliced_span_matches_per_day(
        year in 1990u16..2100,
        a in 0i32..366,
        b in 0i32..366,
    ) {
        let model = ScheduleModel::default();
        let jan1 = date(year, 1, 1);
        let dec31 = date(year, 12, 31);
        let first = jan1.saturating_add_days(a.min(b)).min(dec31);
        let last = jan1.saturating_add_days(a.max(b)).min(dec31);
        prop_assert_eq!(
            model.periods_in_year_span(first, last),
            PerDay(&model).periods_in_year_span(first, last)
        );
    }
}
