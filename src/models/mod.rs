mod forecast_model;
mod series;

pub use forecast_model::{ForecastModel, Prediction, SeasonalDriftModel};
pub use series::{
    ForecastPoint, ForecastWindow, HistoricalPoint, MergedSeries, PointKind, SeriesPoint,
};
