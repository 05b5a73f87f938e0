//! # att-accounting
//!
//! The period accounting engine.
//!
//! [`PeriodAccountant`] sums periods over date ranges and searches forward
//! for the first date on which a required attendance percentage is reached,
//! on top of any [`PeriodSource`](att_schedule::PeriodSource). Reports, leave
//! simulation, the advice boundary and TOML configuration are layered on the
//! same two operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `PeriodAccountant`: range sums and the forward search.
pub mod accountant;

/// Advice boundary: request type, advisor trait, rule-based advisor.
pub mod advice;

/// TOML configuration.
pub mod config;

/// `SearchHorizon`: bound of the forward search.
pub mod horizon;

/// Leave simulation.
pub mod leave;

/// `AttendanceReport` and `Standing`.
pub mod report;

/// `AttendanceState`: caller-owned attended/total counts.
pub mod state;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use accountant::{PeriodAccountant, RequiredDate};
pub use advice::{
    advice_or_fallback, AdviceError, AdviceRequest, AttendanceAdvisor, RuleBasedAdvisor,
    FALLBACK_ADVICE,
};
pub use config::{AttendanceConfig, HolidayEntry};
pub use horizon::SearchHorizon;
pub use leave::{LeaveMode, LeaveRequest, LeaveUnit};
pub use report::{AttendanceReport, Standing};
pub use state::AttendanceState;
