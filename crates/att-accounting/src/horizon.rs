//! `SearchHorizon`: how far the forward search may look.

use serde::{Deserialize, Serialize};

use att_time::Date;

/// Bound of the forward search, counted from its starting date.
///
/// In TOML: `horizon = { days = 730 }` or `horizon = "end-of-next-year"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchHorizon {
    /// Search up to and including `from + n` days.
    Days(u32),
    /// Search up to and including December 31 of the year after `from`.
    EndOfNextYear,
}

impl SearchHorizon {
    /// The default two-year window.
    pub const TWO_YEARS: SearchHorizon = SearchHorizon::Days(730);

    /// Last date examined by a search starting on `from`, clamped to
    /// [`Date::MAX`].
    pub fn limit(&self, from: Date) -> Date {
        match self {
            SearchHorizon::Days(n) => {
                from.saturating_add_days(i32::try_from(*n).unwrap_or(i32::MAX))
            }
            SearchHorizon::EndOfNextYear => from
                .last_of_year()
                .succ()
                .map_or(Date::MAX, |next_year| next_year.last_of_year()),
        }
    }
}

impl Default for SearchHorizon {
    fn default() -> Self {
        Self::TWO_YEARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn two_years_is_inclusive_day_count() {
        let from = date(2024, 1, 1);
        assert_eq!(SearchHorizon::TWO_YEARS.limit(from), date(2025, 12, 31));
        assert_eq!(SearchHorizon::Days(0).limit(from), from);
    }

    #[test]
    fn end_of_next_year() {
        assert_eq!(
            SearchHorizon::EndOfNextYear.limit(date(2024, 8, 10)),
            date(2025, 12, 31)
        );
        assert_eq!(
            SearchHorizon::EndOfNextYear.limit(date(2024, 12, 31)),
            date(2025, 12, 31)
        );
    }

    #[test]
    fn limits_clamp_to_max_date() {
        let late = date(2199, 6, 1);
        assert_eq!(SearchHorizon::TWO_YEARS.limit(late), Date::MAX);
        assert_eq!(SearchHorizon::EndOfNextYear.limit(late), Date::MAX);
        assert_eq!(SearchHorizon::Days(u32::MAX).limit(late), Date::MAX);
    }
}
