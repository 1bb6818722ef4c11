use itertools::izip;

use crate::domain::DateRange;
use crate::forecast::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastPoint, ForecastWindow};
use crate::utils::{add_months, round2};

/// Computes the future monthly dates for `range`, queries the model, and assembles
/// the forecast window. Pure: no side effects beyond the injected model call.
///
/// The i-th future date is `start + i months` for i in 0..horizon, so the window
/// stops one month short of `end`. That mirrors the behavior users already rely on
/// and is locked in by `test_window_excludes_end_month` below.
pub fn build_window(
    model: &dyn ForecastModel,
    range: DateRange,
) -> Result<(ForecastWindow, u32)> {
    let horizon = range.horizon_months();

    let prediction = model.predict(horizon as usize, true);
    if prediction.values.len() != horizon as usize {
        return Err(ForecastError::ModelIntegration {
            expected: horizon as usize,
            got: prediction.values.len(),
        });
    }
    let intervals = prediction.intervals.ok_or(ForecastError::MissingIntervals)?;
    if intervals.len() != horizon as usize {
        return Err(ForecastError::ModelIntegration {
            expected: horizon as usize,
            got: intervals.len(),
        });
    }

    let future_dates = (0..horizon).map(|i| add_months(range.start, i));

    let points = izip!(future_dates, prediction.values, intervals)
        .map(|(date, value, (lower, upper))| ForecastPoint {
            date,
            value: round2(value),
            lower: round2(lower),
            upper: round2(upper),
        })
        .collect();

    Ok((ForecastWindow { points }, horizon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Prediction;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Well-behaved stub: returns exactly `horizon` values around a base price.
    struct StubModel {
        base: f64,
    }

    impl ForecastModel for StubModel {
        fn predict(&self, horizon: usize, with_intervals: bool) -> Prediction {
            let values: Vec<f64> = (0..horizon).map(|i| self.base + i as f64).collect();
            let intervals = with_intervals
                .then(|| values.iter().map(|v| (v - 1.555, v + 1.555)).collect());
            Prediction { values, intervals }
        }
    }

    /// Misbehaving stub: always returns a fixed count regardless of the horizon.
    struct FixedCountModel {
        count: usize,
    }

    impl ForecastModel for FixedCountModel {
        fn predict(&self, _horizon: usize, with_intervals: bool) -> Prediction {
            let values = vec![42.0; self.count];
            let intervals = with_intervals.then(|| vec![(41.0, 43.0); self.count]);
            Prediction { values, intervals }
        }
    }

    #[test]
    fn test_row_count_equals_month_difference() {
        let model = StubModel { base: 40.0 };
        for (start, end, expected) in [
            (d(2024, 12, 1), d(2025, 2, 1), 2),
            (d(2024, 1, 1), d(2025, 1, 1), 12),
            (d(2024, 12, 28), d(2025, 2, 3), 2), // day-of-month ignored
            (d(2023, 6, 15), d(2024, 8, 15), 14),
        ] {
            let (window, horizon) =
                build_window(&model, DateRange::new(start, end)).unwrap();
            assert_eq!(horizon, expected);
            assert_eq!(window.len(), expected as usize);
        }
    }

    #[test]
    fn test_future_dates_step_by_one_month() {
        let model = StubModel { base: 40.0 };
        let (window, _) =
            build_window(&model, DateRange::new(d(2024, 10, 1), d(2025, 4, 1))).unwrap();

        for (i, point) in window.points.iter().enumerate() {
            assert_eq!(point.date, add_months(d(2024, 10, 1), i as u32));
        }
        // Strictly increasing, no duplicates
        for pair in window.points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_window_excludes_end_month() {
        // start 2024-12-01, end 2025-02-01: horizon 2, dates Dec and Jan only
        let model = StubModel { base: 40.0 };
        let (window, horizon) =
            build_window(&model, DateRange::new(d(2024, 12, 1), d(2025, 2, 1))).unwrap();

        assert_eq!(horizon, 2);
        let dates: Vec<NaiveDate> = window.points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2024, 12, 1), d(2025, 1, 1)]);
    }

    #[test]
    fn test_values_rounded_and_bracketed() {
        let model = StubModel { base: 40.111 };
        let (window, _) =
            build_window(&model, DateRange::new(d(2024, 12, 1), d(2025, 3, 1))).unwrap();

        for p in &window.points {
            assert_eq!(p.value, round2(p.value), "value rounded to 2 decimals");
            assert_eq!(p.lower, round2(p.lower));
            assert_eq!(p.upper, round2(p.upper));
            assert!(p.lower <= p.value && p.value <= p.upper);
        }
        assert_eq!(window.points[0].value, 40.11);
        assert_eq!(window.points[0].lower, 38.56); // 40.111 - 1.555 = 38.556
    }

    #[test]
    fn test_wrong_forecast_count_is_fatal() {
        let model = FixedCountModel { count: 3 };
        let err = build_window(&model, DateRange::new(d(2024, 12, 1), d(2025, 2, 1)))
            .unwrap_err();
        assert!(matches!(
            err,
            ForecastError::ModelIntegration {
                expected: 2,
                got: 3
            }
        ));
    }
}
