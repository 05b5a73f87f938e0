//! Integration tests for reports, leave simulation and advice.

use approx::assert_relative_eq;
use att_accounting::{
    advice_or_fallback, AdviceError, AdviceRequest, AttendanceAdvisor, AttendanceState,
    LeaveMode, LeaveRequest, LeaveUnit, PeriodAccountant, RequiredDate, RuleBasedAdvisor,
    Standing, FALLBACK_ADVICE,
};
use att_core::errors::Error;
use att_schedule::ScheduleModel;
use att_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn accountant() -> PeriodAccountant<ScheduleModel> {
    PeriodAccountant::new(ScheduleModel::default())
}

fn state(attended: u64, total: u64) -> AttendanceState {
    AttendanceState::new(attended, total).unwrap()
}

// ─── Reports ──────────────────────────────────────────────────────────────────

#[test]
fn report_after_attending_a_week() {
    let report = accountant()
        .report(state(10, 20), date(2024, 1, 1), date(2024, 1, 5))
        .unwrap();
    assert_eq!(report.state, state(44, 54));
    assert_relative_eq!(report.percentage, 4400.0 / 54.0, epsilon = 1e-12);
    assert_eq!(report.periods_to_maintain, 41);
    assert_eq!(report.buffer, 3);
    assert_eq!(report.standing, Standing::CanMiss(3));
    assert_eq!(report.required_date, RequiredDate::AlreadyMet);
    assert_eq!(report.message(), "You can miss 3 period(s).");
}

#[test]
fn report_below_requirement_searches_after_range() {
    let acc = accountant();
    let end = date(2024, 1, 1);
    let report = acc.report(state(0, 100), end, end).unwrap();
    assert_eq!(report.state, state(6, 106));
    assert_eq!(report.standing, Standing::BelowRequirement);

    let RequiredDate::ReachableOn(day) = report.required_date else {
        panic!("expected a reachable date, got {:?}", report.required_date);
    };
    let first = date(2024, 1, 2);
    let required = acc.required_percentage();
    assert!(report.state.attending(acc.periods_in_range(first, day)).meets(required));
    assert!(!report
        .state
        .attending(acc.periods_in_range(first, day.saturating_add_days(-1)))
        .meets(required));
    assert!(report.message().contains(&day.to_string()));
}

#[test]
fn report_without_any_periods_fails() {
    let sunday = date(2024, 1, 7);
    assert_eq!(
        accountant().report(AttendanceState::default(), sunday, sunday),
        Err(Error::NoPeriods)
    );
}

#[test]
fn report_ending_on_last_supported_date_has_nothing_to_search() {
    let acc = accountant();
    let last = Date::MAX;
    let held = acc.periods_in_range(last, last);
    assert_eq!(held, 7);

    let report = acc.report(state(0, 4), last, last).unwrap();
    assert_eq!(report.state, state(7, 11));
    assert_eq!(report.standing, Standing::BelowRequirement);
    assert_eq!(report.required_date, RequiredDate::Unreachable);

    let met = acc.report(state(20, 20), last, last).unwrap();
    assert_eq!(met.required_date, RequiredDate::AlreadyMet);
}

// ─── Leave ────────────────────────────────────────────────────────────────────

#[test]
fn retroactive_periods_become_misses() {
    let request = LeaveRequest::new(LeaveMode::Retroactive, LeaveUnit::Periods, 10);
    let report = accountant()
        .simulate_leave(state(30, 40), date(2024, 1, 1), request)
        .unwrap();
    assert_eq!(report.state, state(20, 40));
    assert_relative_eq!(report.percentage, 50.0);
    assert_eq!(report.standing, Standing::BelowRequirement);
}

#[test]
fn retroactive_days_use_schedule() {
    // Monday and Tuesday: 6 + 7 periods.
    let request = LeaveRequest::new(LeaveMode::Retroactive, LeaveUnit::Days, 2);
    let report = accountant()
        .simulate_leave(state(30, 40), date(2024, 1, 1), request)
        .unwrap();
    assert_eq!(report.state, state(17, 40));
}

#[test]
fn retroactive_leave_cannot_exceed_attendance() {
    let request = LeaveRequest::new(LeaveMode::Retroactive, LeaveUnit::Periods, 31);
    assert_eq!(
        accountant().simulate_leave(state(30, 40), date(2024, 1, 1), request),
        Err(Error::LeaveExceedsAttendance {
            leave: 31,
            attended: 30
        })
    );
}

#[test]
fn prospective_week_adds_to_total() {
    // Monday 8 to Sunday 14 January.
    let request = LeaveRequest::new(LeaveMode::Prospective, LeaveUnit::Days, 7);
    let report = accountant()
        .simulate_leave(state(40, 40), date(2024, 1, 7), request)
        .unwrap();
    assert_eq!(report.state, state(40, 81));
    assert_eq!(report.standing, Standing::BelowRequirement);
    let day = report.required_date.date().unwrap();
    assert!(day >= date(2024, 1, 15));
}

#[test]
fn prospective_periods_add_to_total() {
    let request = LeaveRequest::new(LeaveMode::Prospective, LeaveUnit::Periods, 4);
    let report = accountant()
        .simulate_leave(state(30, 40), date(2024, 1, 1), request)
        .unwrap();
    assert_eq!(report.state, state(30, 44));
}

#[test]
fn leave_ending_on_last_supported_date_has_nothing_to_search() {
    let acc = accountant();
    let short = LeaveRequest::new(LeaveMode::Prospective, LeaveUnit::Periods, 4);
    let report = acc.simulate_leave(state(30, 40), Date::MAX, short).unwrap();
    assert_eq!(report.state, state(30, 44));
    assert_eq!(report.required_date, RequiredDate::Unreachable);

    // Days past the last date are clamped and searched from nowhere.
    let days = LeaveRequest::new(LeaveMode::Prospective, LeaveUnit::Days, 3);
    let report = acc
        .simulate_leave(state(30, 40), Date::MAX.saturating_add_days(-1), days)
        .unwrap();
    assert_eq!(report.state, state(30, 47));
    assert_eq!(report.required_date, RequiredDate::Unreachable);

    let retro = LeaveRequest::new(LeaveMode::Retroactive, LeaveUnit::Periods, 1);
    let report = acc.simulate_leave(state(40, 40), Date::MAX, retro).unwrap();
    assert_eq!(report.required_date, RequiredDate::AlreadyMet);
}

// ─── Advice ───────────────────────────────────────────────────────────────────

struct Offline;

impl AttendanceAdvisor for Offline {
    async fn advise(&self, _request: &AdviceRequest) -> Result<String, AdviceError> {
        Err(AdviceError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn failed_advisor_falls_back() {
    let request = AdviceRequest::new(state(30, 40), Default::default());
    assert_eq!(advice_or_fallback(&Offline, &request).await, FALLBACK_ADVICE);
}

#[tokio::test]
async fn rule_based_advice_from_report() {
    let report = accountant()
        .report(state(10, 20), date(2024, 1, 1), date(2024, 1, 5))
        .unwrap();
    let request = AdviceRequest::from_report(&report);
    assert_eq!(request.attended, 44);
    assert_eq!(request.total, 54);

    let advice = advice_or_fallback(&RuleBasedAdvisor::default(), &request).await;
    assert!(advice.contains("only **3** period(s)"), "{advice}");
}
