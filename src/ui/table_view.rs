use eframe::egui::{Color32, Grid, RichText, ScrollArea, Ui};
use serde::{Deserialize, Serialize};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{MergedSeries, PointKind, SeriesPoint};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_month_year;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    Date,
    Price,
    Kind,
    Lower,
    Upper,
}

impl SortColumn {
    fn header(&self) -> &'static str {
        match self {
            Self::Date => UI_TEXT.th_date,
            Self::Price => UI_TEXT.th_price,
            Self::Kind => UI_TEXT.th_kind,
            Self::Lower => UI_TEXT.th_lower,
            Self::Upper => UI_TEXT.th_upper,
        }
    }
}

/// The sortable forecast table. Sort state lives in the App (persisted);
/// the default view is newest-first, like the reference dashboard.
pub struct TableView<'a> {
    merged: &'a MergedSeries,
}

/// Missing bounds sort below any real number
fn sort_key_f64(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NEG_INFINITY)
}

fn sorted_rows<'a>(
    merged: &'a MergedSeries,
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&'a SeriesPoint> {
    let mut rows: Vec<&SeriesPoint> = merged.points.iter().collect();

    // Stable sort on top of the date-ordered series, so equal keys stay chronological
    match column {
        SortColumn::Date => {} // already ascending by construction
        SortColumn::Price => rows.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortColumn::Kind => rows.sort_by_key(|p| p.kind == PointKind::Predicted),
        SortColumn::Lower => {
            rows.sort_by(|a, b| sort_key_f64(a.lower).total_cmp(&sort_key_f64(b.lower)))
        }
        SortColumn::Upper => {
            rows.sort_by(|a, b| sort_key_f64(a.upper).total_cmp(&sort_key_f64(b.upper)))
        }
    }

    if direction == SortDirection::Descending {
        rows.reverse();
    }
    rows
}

fn format_bound(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => UI_TEXT.missing_value.to_string(),
    }
}

impl<'a> TableView<'a> {
    pub fn new(merged: &'a MergedSeries) -> Self {
        Self { merged }
    }

    pub fn render(
        &self,
        ui: &mut Ui,
        sort_col: &mut SortColumn,
        sort_dir: &mut SortDirection,
    ) {
        let columns = [
            SortColumn::Date,
            SortColumn::Price,
            SortColumn::Kind,
            SortColumn::Lower,
            SortColumn::Upper,
        ];

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("forecast_table")
                    .striped(true)
                    .num_columns(columns.len())
                    .min_col_width(110.0)
                    .show(ui, |ui| {
                        for col in columns {
                            let marker = if *sort_col == col {
                                sort_dir.arrow()
                            } else {
                                ""
                            };
                            let label = format!("{} {}", col.header(), marker);
                            if ui
                                .selectable_label(*sort_col == col, RichText::new(label).strong())
                                .clicked()
                            {
                                if *sort_col == col {
                                    *sort_dir = sort_dir.toggle();
                                } else {
                                    *sort_col = col;
                                    *sort_dir = SortDirection::Descending;
                                }
                            }
                        }
                        ui.end_row();

                        for row in sorted_rows(self.merged, *sort_col, *sort_dir) {
                            let kind_color = match row.kind {
                                PointKind::Historical => PLOT_CONFIG.historical_line_color,
                                PointKind::Predicted => PLOT_CONFIG.forecast_line_color,
                            };

                            ui.label(format_month_year(row.date));
                            ui.label(format!("{:.2}", row.value));
                            ui.label(RichText::new(row.kind.to_string()).color(kind_color));
                            ui.label(
                                RichText::new(format_bound(row.lower)).color(Color32::GRAY),
                            );
                            ui.label(
                                RichText::new(format_bound(row.upper)).color(Color32::GRAY),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeriesPoint;
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, value: f64, kind: PointKind) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            value,
            lower: (kind == PointKind::Predicted).then_some(value - 2.0),
            upper: (kind == PointKind::Predicted).then_some(value + 2.0),
            kind,
        }
    }

    fn series() -> MergedSeries {
        MergedSeries {
            points: vec![
                point(2024, 10, 40.0, PointKind::Historical),
                point(2024, 11, 42.5, PointKind::Historical),
                point(2024, 12, 41.0, PointKind::Predicted),
                point(2025, 1, 43.0, PointKind::Predicted),
            ],
        }
    }

    #[test]
    fn test_default_sort_is_date_descending() {
        let merged = series();
        let rows = sorted_rows(&merged, SortColumn::Date, SortDirection::Descending);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(rows[3].date, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[test]
    fn test_sort_by_price() {
        let merged = series();
        let rows = sorted_rows(&merged, SortColumn::Price, SortDirection::Ascending);
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![40.0, 41.0, 42.5, 43.0]);
    }

    #[test]
    fn test_missing_bounds_sort_below_real_values_ascending() {
        let merged = series();
        let rows = sorted_rows(&merged, SortColumn::Lower, SortDirection::Ascending);
        assert_eq!(rows[0].lower, None);
        assert_eq!(rows[1].lower, None);
        assert!(rows[2].lower.is_some());
    }

    #[test]
    fn test_bound_formatting_uses_dash_placeholder() {
        assert_eq!(format_bound(None), "-");
        assert_eq!(format_bound(Some(41.0)), "41.00");
    }
}
