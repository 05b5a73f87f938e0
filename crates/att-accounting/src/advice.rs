//! Advice boundary.
//!
//! Recommendations are produced by an external text generator that is not
//! part of this workspace. The engine only defines what it hands over
//! ([`AdviceRequest`]), the async [`AttendanceAdvisor`] seam, and the
//! fallback shown when the generator fails. [`RuleBasedAdvisor`] is an
//! in-process implementation of the same rules the hosted prompt asks for.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use att_core::{PeriodCount, Percentage};
use att_schedule::RequiredPercentage;

use crate::report::AttendanceReport;
use crate::state::AttendanceState;

/// Message shown in place of advice when the advisor fails.
pub const FALLBACK_ADVICE: &str =
    "Sorry, I couldn't generate advice at this moment. Please try again later.";

/// Structured numbers handed to an advisor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// Periods attended.
    pub attended: PeriodCount,
    /// Periods held.
    pub total: PeriodCount,
    /// Minimum attendance percentage.
    pub required_percentage: Percentage,
}

impl AdviceRequest {
    /// Build a request from a state and a threshold.
    pub fn new(state: AttendanceState, required: RequiredPercentage) -> Self {
        Self {
            attended: state.attended(),
            total: state.total(),
            required_percentage: required.value(),
        }
    }

    /// Build a request from a finished report.
    pub fn from_report(report: &AttendanceReport) -> Self {
        Self::new(report.state, report.required)
    }
}

/// Failure to produce advice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdviceError {
    /// The advisor could not be reached or returned nothing usable.
    #[error("advice unavailable: {0}")]
    Unavailable(String),

    /// The request numbers are inconsistent.
    #[error("invalid advice request: {0}")]
    InvalidRequest(String),
}

/// Something that turns attendance numbers into a recommendation.
#[allow(async_fn_in_trait)]
pub trait AttendanceAdvisor {
    /// Produce a free-text recommendation for `request`.
    async fn advise(&self, request: &AdviceRequest) -> Result<String, AdviceError>;
}

/// Ask `advisor`, substituting [`FALLBACK_ADVICE`] on failure.
pub async fn advice_or_fallback<A: AttendanceAdvisor>(
    advisor: &A,
    request: &AdviceRequest,
) -> String {
    match advisor.advise(request).await {
        Ok(advice) => advice,
        Err(e) => {
            warn!(error = %e, "attendance advice unavailable");
            FALLBACK_ADVICE.to_string()
        }
    }
}

/// Deterministic advisor following the hosted prompt's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBasedAdvisor {
    /// Buffer above which a day off is suggested.
    pub comfortable_buffer: PeriodCount,
}

impl Default for RuleBasedAdvisor {
    fn default() -> Self {
        Self {
            comfortable_buffer: 10,
        }
    }
}

impl RuleBasedAdvisor {
    /// Produce the recommendation synchronously.
    pub fn recommend(&self, request: &AdviceRequest) -> Result<String, AdviceError> {
        let required = RequiredPercentage::new(request.required_percentage)
            .map_err(|e| AdviceError::InvalidRequest(e.to_string()))?;
        let state = AttendanceState::new(request.attended, request.total)
            .map_err(|e| AdviceError::InvalidRequest(e.to_string()))?;

        let Some(current) = state.percentage() else {
            return Ok("No periods have been held yet, so there is nothing to advise on. \
                       Enter your attended and total periods first."
                .to_string());
        };

        if !state.meets(required) {
            return Ok(match state.periods_needed(required) {
                Some(n) => format!(
                    "You are currently at **{current:.2}%**. To reach the required \
                     **{required}**, you need to attend the next **{n}** periods without fail."
                ),
                None => format!(
                    "You are currently at **{current:.2}%**. The required **{required}** \
                     can no longer be reached, because a period has already been missed."
                ),
            });
        }

        let buffer = state.buffer(required).max(0) as PeriodCount;
        if buffer > self.comfortable_buffer {
            Ok(format!(
                "Your attendance is looking great at **{current:.2}%**! You can miss up to \
                 **{buffer}** periods. Maybe it's a good time to take a day for that hobby \
                 you love."
            ))
        } else if buffer > 0 {
            Ok(format!(
                "Nice work, you're on track at **{current:.2}%**. Be careful though: you can \
                 miss only **{buffer}** period(s) before dropping below **{required}**."
            ))
        } else {
            Ok(format!(
                "Nice work, you're on track at **{current:.2}%**. Be careful though: missing \
                 even one more period would drop you below **{required}**."
            ))
        }
    }
}

impl AttendanceAdvisor for RuleBasedAdvisor {
    async fn advise(&self, request: &AdviceRequest) -> Result<String, AdviceError> {
        self.recommend(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(attended: PeriodCount, total: PeriodCount) -> AdviceRequest {
        AdviceRequest {
            attended,
            total,
            required_percentage: 75.0,
        }
    }

    #[test]
    fn below_requirement_names_periods_needed() {
        let advice = RuleBasedAdvisor::default().recommend(&request(0, 10)).unwrap();
        assert!(advice.contains("**0.00%**"), "{advice}");
        assert!(advice.contains("**30** periods"), "{advice}");
        assert!(advice.contains("**75%**"), "{advice}");
    }

    #[test]
    fn comfortable_buffer_suggests_day_off() {
        let advice = RuleBasedAdvisor::default().recommend(&request(95, 100)).unwrap();
        assert!(advice.contains("**20** periods"), "{advice}");
        assert!(advice.contains("hobby"), "{advice}");
    }

    #[test]
    fn small_buffer_is_cautious() {
        let advisor = RuleBasedAdvisor::default();
        let advice = advisor.recommend(&request(80, 100)).unwrap();
        assert!(advice.contains("only **5** period(s)"), "{advice}");
        let advice = advisor.recommend(&request(75, 100)).unwrap();
        assert!(advice.contains("even one more period"), "{advice}");
    }

    #[test]
    fn inconsistent_request_is_rejected() {
        let advisor = RuleBasedAdvisor::default();
        assert!(matches!(
            advisor.recommend(&request(11, 10)),
            Err(AdviceError::InvalidRequest(_))
        ));
        let bad = AdviceRequest {
            required_percentage: 150.0,
            ..request(1, 2)
        };
        assert!(advisor.recommend(&bad).is_err());
    }

    #[test]
    fn request_uses_camel_case_fields() {
        let json = toml::to_string(&request(3, 4)).unwrap();
        assert!(json.contains("requiredPercentage = 75.0"), "{json}");
    }
}
