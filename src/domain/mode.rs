use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::FORECASTING;
use crate::utils::add_months;

/// Which horizon class the user is forecasting. Each mode maps to its own
/// pre-fitted model artifact on disk.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ForecastMode {
    #[default]
    #[strum(to_string = "Short-term Forecast")]
    ShortTerm,
    #[strum(to_string = "Long-term Forecast")]
    LongTerm,
}

impl ForecastMode {
    /// Horizon bound shown next to the mode selector
    pub fn caption(&self) -> &'static str {
        match self {
            Self::ShortTerm => "( <= 6 months )",
            Self::LongTerm => "( > 6 months )",
        }
    }

    /// Suffix used in the model artifact filename
    pub fn file_tag(&self) -> &'static str {
        match self {
            Self::ShortTerm => "short-term",
            Self::LongTerm => "long-term",
        }
    }

    pub fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).expect("valid literal date")
    }

    /// Default end date when switching into this mode
    pub fn default_end(&self) -> NaiveDate {
        let (y, m) = match self {
            Self::ShortTerm => (2025, 2),
            Self::LongTerm => (2025, 7),
        };
        NaiveDate::from_ymd_opt(y, m, 1).expect("valid literal date")
    }

    /// Keeps the end date inside this mode's horizon class:
    /// short-term caps end at start + 6 months, long-term floors it at start + 7.
    /// This is a UI-host concern; the core pipeline trusts the dates it is handed.
    pub fn clamp_end(&self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        match self {
            Self::ShortTerm => end.min(add_months(start, FORECASTING.short_term_max_months)),
            Self::LongTerm => end.max(add_months(start, FORECASTING.long_term_min_months)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_short_term_caps_end_at_six_months() {
        let start = d(2024, 12, 1);
        let wanted = d(2025, 9, 1); // 9 months out
        assert_eq!(
            ForecastMode::ShortTerm.clamp_end(start, wanted),
            d(2025, 6, 1)
        );
        // Inside the cap: untouched
        assert_eq!(
            ForecastMode::ShortTerm.clamp_end(start, d(2025, 2, 1)),
            d(2025, 2, 1)
        );
    }

    #[test]
    fn test_long_term_floors_end_at_seven_months() {
        let start = d(2024, 12, 1);
        assert_eq!(
            ForecastMode::LongTerm.clamp_end(start, d(2025, 2, 1)),
            d(2025, 7, 1)
        );
        assert_eq!(
            ForecastMode::LongTerm.clamp_end(start, d(2026, 1, 1)),
            d(2026, 1, 1)
        );
    }
}
