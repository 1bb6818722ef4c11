use chrono::{Datelike, Months, NaiveDate};

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
/// Abbreviated month + year, e.g. "Dec-2024". Used on the chart axis and in the table.
pub const MONTH_YEAR_FORMAT: &str = "%b-%Y";

/// Absolute month index of a date (year * 12 + zero-based month).
/// Day-of-month is deliberately ignored.
pub fn whole_calendar_months(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

/// Whole-calendar-month difference between two dates (can be negative).
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    whole_calendar_months(end) - whole_calendar_months(start)
}

/// Advance a date by `months` whole months.
/// Day-of-month is clamped to the target month's length (Jan 31 + 1M = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .expect("date out of chrono range")
}

pub fn format_month_year(date: NaiveDate) -> String {
    date.format(MONTH_YEAR_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_months_between_ignores_day_of_month() {
        // 2024-12-28 -> 2025-02-03 is still exactly 2 whole calendar months
        assert_eq!(months_between(d(2024, 12, 28), d(2025, 2, 3)), 2);
        assert_eq!(months_between(d(2024, 12, 1), d(2025, 2, 1)), 2);
        assert_eq!(months_between(d(2025, 2, 1), d(2024, 12, 1)), -2);
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29)); // leap year
        assert_eq!(add_months(d(2024, 12, 1), 13), d(2026, 1, 1));
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(d(2024, 12, 1)), "Dec-2024");
    }
}
