use crate::config::FORECASTING;
use crate::data::{HistoricalReader, ModelLookup};
use crate::domain::{DateRange, ForecastMode};
use crate::forecast::{ForecastError, Result, build_window, merge};
use crate::models::{ForecastWindow, MergedSeries};

/// Everything the UI needs to render one forecast request.
#[derive(Debug, Clone)]
pub struct ForecastOutcome {
    pub merged: MergedSeries,
    pub window: ForecastWindow,
    pub horizon: u32,
}

/// The whole pipeline as one stateless request/response function. The UI host owns
/// all display state; this owns none. Each input change triggers exactly one
/// synchronous run of this.
pub fn run_forecast(
    mode: ForecastMode,
    range: DateRange,
    models: &dyn ModelLookup,
    history: &dyn HistoricalReader,
) -> Result<ForecastOutcome> {
    if !range.is_valid() {
        return Err(ForecastError::InvalidRange {
            start: range.start,
            end: range.end,
        });
    }

    let model = models.model_for(mode);
    let (window, horizon) = build_window(model, range)?;
    let tail = history.historical_tail(FORECASTING.historical_tail_len)?;
    let merged = merge(&tail, &window);

    log::debug!(
        "forecast run: mode={} horizon={} tail={} merged={}",
        mode,
        horizon,
        tail.len(),
        merged.len()
    );

    Ok(ForecastOutcome {
        merged,
        window,
        horizon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastModel, HistoricalPoint, Prediction};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    struct StubModel;

    impl ForecastModel for StubModel {
        fn predict(&self, horizon: usize, with_intervals: bool) -> Prediction {
            let values: Vec<f64> = (0..horizon).map(|i| 42.0 + i as f64).collect();
            let intervals =
                with_intervals.then(|| values.iter().map(|v| (v - 2.0, v + 2.0)).collect());
            Prediction { values, intervals }
        }
    }

    /// Lookup that panics on use, to prove an invalid range short-circuits
    /// before any model work happens.
    struct PanicLookup;

    impl ModelLookup for PanicLookup {
        fn model_for(&self, _mode: ForecastMode) -> &dyn ForecastModel {
            panic!("model must not be consulted for an invalid range");
        }
    }

    struct StubLookup {
        model: StubModel,
    }

    impl ModelLookup for StubLookup {
        fn model_for(&self, _mode: ForecastMode) -> &dyn ForecastModel {
            &self.model
        }
    }

    struct StubHistory {
        points: Vec<HistoricalPoint>,
    }

    impl HistoricalReader for StubHistory {
        fn historical_tail(&self, n: usize) -> Result<Vec<HistoricalPoint>> {
            let skip = self.points.len().saturating_sub(n);
            Ok(self.points[skip..].to_vec())
        }
    }

    #[test]
    fn test_invalid_range_rejected_before_any_computation() {
        let history = StubHistory { points: vec![] };
        let err = run_forecast(
            ForecastMode::ShortTerm,
            DateRange::new(d(2025, 1, 1), d(2025, 1, 1)),
            &PanicLookup,
            &history,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));

        let err = run_forecast(
            ForecastMode::ShortTerm,
            DateRange::new(d(2025, 2, 1), d(2025, 1, 1)),
            &PanicLookup,
            &history,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));
    }

    #[test]
    fn test_happy_path_produces_merged_series_and_window() {
        let lookup = StubLookup { model: StubModel };
        let history = StubHistory {
            points: vec![
                HistoricalPoint {
                    date: d(2024, 10, 1),
                    value: 40.0,
                },
                HistoricalPoint {
                    date: d(2024, 11, 1),
                    value: 41.0,
                },
            ],
        };

        let outcome = run_forecast(
            ForecastMode::ShortTerm,
            DateRange::new(d(2024, 12, 1), d(2025, 2, 1)),
            &lookup,
            &history,
        )
        .unwrap();

        assert_eq!(outcome.horizon, 2);
        assert_eq!(outcome.window.len(), 2);
        assert_eq!(outcome.merged.len(), 4); // 2 historical + 2 predicted
    }
}
