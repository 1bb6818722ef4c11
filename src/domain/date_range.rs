use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::months_between;

/// A user-selected forecast range. `start < end` strictly is required before any
/// computation runs; the request handler rejects violations with `InvalidRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Forecast horizon: whole-calendar-month difference between end and start.
    /// Day-of-month is ignored (2024-12-28 .. 2025-02-03 is still 2 months).
    pub fn horizon_months(&self) -> u32 {
        months_between(self.start, self.end).max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_validity() {
        assert!(DateRange::new(d(2024, 12, 1), d(2025, 2, 1)).is_valid());
        assert!(!DateRange::new(d(2025, 1, 1), d(2025, 1, 1)).is_valid());
        assert!(!DateRange::new(d(2025, 2, 1), d(2025, 1, 1)).is_valid());
    }

    #[test]
    fn test_horizon_is_month_granular() {
        assert_eq!(
            DateRange::new(d(2024, 12, 1), d(2025, 2, 1)).horizon_months(),
            2
        );
        // Days never contribute to the horizon
        assert_eq!(
            DateRange::new(d(2024, 12, 28), d(2025, 2, 3)).horizon_months(),
            2
        );
        // Same month, later day: valid range but zero-month horizon
        assert_eq!(
            DateRange::new(d(2025, 1, 1), d(2025, 1, 20)).horizon_months(),
            0
        );
    }
}
