use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecasted month: point estimate bracketed by its confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

/// One recorded observation from the historical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Historical,
    Predicted,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::Historical => write!(f, "Historical"),
            PointKind::Predicted => write!(f, "Predicted"),
        }
    }
}

/// A point in the merged display series. Historical points carry no bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub kind: PointKind,
}

/// The forecast window: one row per future month, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastWindow {
    pub points: Vec<ForecastPoint>,
}

impl ForecastWindow {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Historical tail + forecast window combined, ascending by date.
/// Colliding dates are NOT deduplicated; both points are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedSeries {
    pub points: Vec<SeriesPoint>,
}

impl MergedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) over the point values, for chart y-axis scaling
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
