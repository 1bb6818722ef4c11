use serde::{Deserialize, Serialize};

/// Output of one model query: `values.len()` point forecasts plus, when requested,
/// a parallel sequence of (lower, upper) interval pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub values: Vec<f64>,
    pub intervals: Option<Vec<(f64, f64)>>,
}

/// The query contract every pre-fitted model artifact satisfies. The dashboard never
/// trains anything; it only asks an already-fitted model for the next `horizon`
/// monthly steps after its training window.
pub trait ForecastModel {
    fn predict(&self, horizon: usize, with_intervals: bool) -> Prediction;
}

/// A fitted level/drift/seasonal parameter set, deserialized from a JSON artifact.
///
/// Forecast for step i (1-based): level + drift * i + seasonal[(cycle_offset + i - 1) % 12].
/// Interval half-width widens with the step: z * sigma * sqrt(i).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalDriftModel {
    /// Fitted series level at the end of the training window
    pub level: f64,
    /// Fitted linear trend per month
    pub drift_per_month: f64,
    /// Additive monthly seasonal factors, January first
    pub seasonal: Vec<f64>,
    /// Residual standard deviation from the fit
    pub sigma: f64,
    /// Interval z-value (1.96 for 95% intervals)
    pub z_value: f64,
    /// Zero-based month index (0 = January) of the first month AFTER training
    pub cycle_offset: usize,
}

impl ForecastModel for SeasonalDriftModel {
    fn predict(&self, horizon: usize, with_intervals: bool) -> Prediction {
        let seasonal_at = |step: usize| -> f64 {
            if self.seasonal.is_empty() {
                0.0
            } else {
                self.seasonal[(self.cycle_offset + step) % self.seasonal.len()]
            }
        };

        let values: Vec<f64> = (0..horizon)
            .map(|i| self.level + self.drift_per_month * (i + 1) as f64 + seasonal_at(i))
            .collect();

        let intervals = with_intervals.then(|| {
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let half = self.z_value * self.sigma * ((i + 1) as f64).sqrt();
                    (v - half, v + half)
                })
                .collect()
        });

        Prediction { values, intervals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SeasonalDriftModel {
        SeasonalDriftModel {
            level: 40.0,
            drift_per_month: 0.5,
            seasonal: vec![0.0, 1.0, -1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            sigma: 1.2,
            z_value: 1.96,
            cycle_offset: 11, // training ended in November; first step is December
        }
    }

    #[test]
    fn test_predict_returns_exactly_horizon_values() {
        let p = model().predict(5, true);
        assert_eq!(p.values.len(), 5);
        assert_eq!(p.intervals.as_ref().unwrap().len(), 5);
    }

    #[test]
    fn test_intervals_bracket_values_and_widen() {
        let p = model().predict(6, true);
        let intervals = p.intervals.unwrap();
        let mut prev_width = 0.0;
        for (v, (lo, hi)) in p.values.iter().zip(&intervals) {
            assert!(lo <= v && v <= hi, "interval must bracket the point forecast");
            let width = hi - lo;
            assert!(width > prev_width, "intervals widen with the step");
            prev_width = width;
        }
    }

    #[test]
    fn test_no_intervals_when_not_requested() {
        let p = model().predict(3, false);
        assert_eq!(p.values.len(), 3);
        assert!(p.intervals.is_none());
    }

    #[test]
    fn test_seasonal_cycle_wraps() {
        let m = model();
        let p = m.predict(2, false);
        // step 0 wraps to seasonal[(11 + 0) % 12] = December slot,
        // step 1 to seasonal[0] = January slot
        assert_eq!(p.values[0], 40.0 + 0.5 + 0.0);
        assert_eq!(p.values[1], 40.0 + 1.0 + 0.0);
    }
}
