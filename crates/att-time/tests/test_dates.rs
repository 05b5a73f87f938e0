//! Integration tests for `Date`, `Month`, `Weekday` and `DateRange`.

use att_time::date::{days_in_month, is_leap_year};
use att_time::{Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Leap years ───────────────────────────────────────────────────────────────

#[test]
fn leap_year_rule() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2004));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
}

#[test]
fn february_29_exists_only_in_leap_years() {
    for year in [2000, 2004, 2024] {
        assert!(Date::from_ymd(year, 2, 29).is_ok(), "{year} should have Feb 29");
    }
    for year in [2023, 2100, 1900] {
        assert!(Date::from_ymd(year, 2, 29).is_err(), "{year} has no Feb 29");
    }
}

#[test]
fn days_in_month_table() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 4), 30);
    assert_eq!(days_in_month(2023, 12), 31);
    assert_eq!(days_in_month(2023, 13), 0);
}

// ─── Weekdays ─────────────────────────────────────────────────────────────────

#[test]
fn known_weekdays() {
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 7, 19).weekday(), Weekday::Friday);
    assert_eq!(date(2025, 7, 19).weekday(), Weekday::Saturday);
    assert_eq!(date(2100, 3, 1).weekday(), Weekday::Monday);
}

#[test]
fn weekdays_cycle_across_year_boundaries() {
    let start = date(1999, 12, 25);
    let mut expected = start.weekday();
    for d in start.range_to(date(2001, 1, 10)) {
        assert_eq!(d.weekday(), expected, "weekday mismatch on {d}");
        expected = expected.succ();
    }
}

#[test]
fn month_accessor_matches_ymd() {
    let d = date(2024, 10, 4);
    assert_eq!(d.month(), Month::October);
    assert_eq!(d.month().index(), 9);
    assert_eq!(d.day_of_month(), 4);
}

// ─── Ranges ───────────────────────────────────────────────────────────────────

#[test]
fn range_covers_leap_year() {
    let days = date(2024, 1, 1).range_to(date(2024, 12, 31)).count();
    assert_eq!(days, 366);
    let days = date(2100, 1, 1).range_to(date(2100, 12, 31)).count();
    assert_eq!(days, 365);
}

proptest! {
    #[test]
    fn serial_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(d.year(), d.month().number(), d.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, d);
    }

    #[test]
    fn display_parses_back(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let parsed: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(parsed, d);
    }

    #[test]
    fn succ_advances_weekday(serial in Date::MIN.serial()..Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let next = d.succ().unwrap();
        prop_assert_eq!(next.weekday(), d.weekday().succ());
        prop_assert_eq!(d.days_between(next), 1);
    }
}
