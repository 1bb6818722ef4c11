use crate::models::{ForecastWindow, HistoricalPoint, MergedSeries, PointKind, SeriesPoint};
use crate::utils::round2;

/// Combines the historical tail and the forecast window into one chronologically
/// ordered, kind-tagged series for display.
///
/// - historical points first, then predicted; the sort is stable, so a historical
///   and a predicted point sharing a date keep that order
/// - no deduplication: output length is always len(historical) + window.len()
/// - the historical slice is taken as-is, never re-filtered by date
/// - every numeric field is rounded to 2 decimals
pub fn merge(historical: &[HistoricalPoint], window: &ForecastWindow) -> MergedSeries {
    let mut points: Vec<SeriesPoint> = historical
        .iter()
        .map(|h| SeriesPoint {
            date: h.date,
            value: round2(h.value),
            lower: None,
            upper: None,
            kind: PointKind::Historical,
        })
        .collect();

    points.extend(window.points.iter().map(|p| SeriesPoint {
        date: p.date,
        value: round2(p.value),
        lower: Some(round2(p.lower)),
        upper: Some(round2(p.upper)),
        kind: PointKind::Predicted,
    }));

    // Vec::sort_by_key is stable; ties keep concatenation order
    points.sort_by_key(|p| p.date);

    MergedSeries { points }
}
