//! `AttendanceState`: attended and total periods, owned by the caller.

use att_core::errors::{Error, Result};
use att_core::{PeriodBalance, PeriodCount, Percentage};
use att_schedule::RequiredPercentage;

/// Attended and total period counts, with `attended <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttendanceState {
    attended: PeriodCount,
    total: PeriodCount,
}

impl AttendanceState {
    /// Create a state.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `attended > total`.
    pub fn new(attended: PeriodCount, total: PeriodCount) -> Result<Self> {
        if attended > total {
            return Err(Error::InvalidArgument(format!(
                "attended periods ({attended}) exceed total periods ({total})"
            )));
        }
        Ok(Self { attended, total })
    }

    /// Periods attended.
    pub fn attended(&self) -> PeriodCount {
        self.attended
    }

    /// Periods held.
    pub fn total(&self) -> PeriodCount {
        self.total
    }

    /// Periods missed.
    pub fn missed(&self) -> PeriodCount {
        self.total - self.attended
    }

    /// State after attending `n` more periods.
    pub fn attending(self, n: PeriodCount) -> Self {
        Self {
            attended: self.attended.saturating_add(n),
            total: self.total.saturating_add(n),
        }
    }

    /// State after missing `n` more periods.
    pub fn missing(self, n: PeriodCount) -> Self {
        Self {
            attended: self.attended,
            total: self.total.saturating_add(n),
        }
    }

    /// `attended / total`, or `None` when nothing has been held.
    pub fn ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| self.attended as f64 / self.total as f64)
    }

    /// Attendance on the 0–100 scale, or `None` when nothing has been held.
    pub fn percentage(&self) -> Option<Percentage> {
        self.ratio().map(|r| r * 100.0)
    }

    /// `true` if the threshold is reached.
    pub fn meets(&self, required: RequiredPercentage) -> bool {
        required.is_met_by(self.attended, self.total)
    }

    /// Minimum attended periods for `total` to satisfy the threshold.
    pub fn periods_to_maintain(&self, required: RequiredPercentage) -> PeriodCount {
        (self.total as f64 * required.value() / 100.0).ceil() as PeriodCount
    }

    /// Attended periods above the minimum; negative when short.
    pub fn buffer(&self, required: RequiredPercentage) -> PeriodBalance {
        self.attended as PeriodBalance - self.periods_to_maintain(required) as PeriodBalance
    }

    /// Fewest consecutive attended periods that reach the threshold.
    ///
    /// `Some(0)` when it is already met; `None` when no number of further
    /// periods can reach it (a 100 % requirement after a miss).
    pub fn periods_needed(&self, required: RequiredPercentage) -> Option<PeriodCount> {
        if self.meets(required) {
            return Some(0);
        }
        if self.total == 0 {
            return Some(1);
        }
        let p = required.value();
        if p >= 100.0 {
            return None;
        }
        let estimate = (p * self.total as f64 - 100.0 * self.attended as f64) / (100.0 - p);
        let mut n = estimate.ceil().max(0.0) as PeriodCount;
        while !self.attending(n).meets(required) {
            n += 1;
        }
        while n > 0 && self.attending(n - 1).meets(required) {
            n -= 1;
        }
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pct(p: f64) -> RequiredPercentage {
        RequiredPercentage::new(p).unwrap()
    }

    #[test]
    fn rejects_attended_above_total() {
        assert!(AttendanceState::new(5, 4).is_err());
        assert!(AttendanceState::new(4, 4).is_ok());
        assert!(AttendanceState::new(0, 0).is_ok());
    }

    #[test]
    fn ratio_undefined_without_periods() {
        let s = AttendanceState::default();
        assert_eq!(s.ratio(), None);
        assert!(!s.meets(pct(0.0)));
    }

    #[test]
    fn percentage_and_buffer() {
        let s = AttendanceState::new(44, 54).unwrap();
        assert_relative_eq!(s.percentage().unwrap(), 81.481_481, epsilon = 1e-5);
        assert_eq!(s.periods_to_maintain(pct(75.0)), 41);
        assert_eq!(s.buffer(pct(75.0)), 3);
        assert_eq!(s.missed(), 10);

        let short = AttendanceState::new(20, 40).unwrap();
        assert_eq!(short.buffer(pct(75.0)), -10);
    }

    #[test]
    fn periods_needed_is_minimal() {
        let s = AttendanceState::new(0, 10).unwrap();
        assert_eq!(s.periods_needed(pct(75.0)), Some(30));
        assert!(s.attending(30).meets(pct(75.0)));
        assert!(!s.attending(29).meets(pct(75.0)));

        let odd = AttendanceState::new(7, 12).unwrap();
        let n = odd.periods_needed(pct(66.6)).unwrap();
        assert!(odd.attending(n).meets(pct(66.6)));
        assert!(!odd.attending(n - 1).meets(pct(66.6)));
    }

    #[test]
    fn periods_needed_edge_cases() {
        assert_eq!(AttendanceState::new(9, 10).unwrap().periods_needed(pct(80.0)), Some(0));
        assert_eq!(AttendanceState::default().periods_needed(pct(75.0)), Some(1));
        assert_eq!(AttendanceState::new(9, 10).unwrap().periods_needed(pct(100.0)), None);
    }

    #[test]
    fn attending_and_missing() {
        let s = AttendanceState::new(3, 4).unwrap();
        assert_eq!(s.attending(2), AttendanceState::new(5, 6).unwrap());
        assert_eq!(s.missing(2), AttendanceState::new(3, 6).unwrap());
    }
}
