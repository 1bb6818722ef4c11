use chrono::NaiveDate;
use eframe::egui::{Color32, Stroke, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Corner, GridMark, Legend, Line, Plot, PlotPoints, Polygon, VPlacement};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{ForecastWindow, MergedSeries};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{format_month_year, whole_calendar_months};

/// Renders the forecast chart: the combined series as one line, the forecast
/// overlaid in its own color, and the confidence band as a filled polygon.
#[derive(Default)]
pub struct PlotView;

/// X coordinate for a date: its absolute month index. One unit = one month,
/// which keeps monthly points equally spaced regardless of month length.
fn month_x(date: NaiveDate) -> f64 {
    whole_calendar_months(date) as f64
}

/// Inverse of `month_x`, for axis labels. Non-integer grid values get no label.
fn month_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    let months = rounded as i64;
    let year = months.div_euclid(12) as i32;
    let month = months.rem_euclid(12) as u32 + 1;
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => format_month_year(date),
        None => String::new(),
    }
}

/// Whole-month grid marks, thinned so roughly a dozen labels fit the span.
fn month_grid_marks(bounds: (f64, f64)) -> Vec<GridMark> {
    let (min, max) = bounds;
    let span = (max - min).max(1.0);
    let step = (span / 12.0).ceil().max(1.0);

    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;

    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

impl PlotView {
    pub fn show(&self, ui: &mut Ui, merged: &MergedSeries, window: &ForecastWindow) {
        if merged.is_empty() {
            ui.label(UI_TEXT.missing_value);
            return;
        }

        // Combined trace over the whole merged series (blue), forecast overlaid
        let combined: Vec<[f64; 2]> = merged
            .points
            .iter()
            .map(|p| [month_x(p.date), p.value])
            .collect();

        let forecast: Vec<[f64; 2]> = window
            .points
            .iter()
            .map(|p| [month_x(p.date), p.value])
            .collect();

        // Band outline: upper bounds forward, then lower bounds reversed
        let mut band: Vec<[f64; 2]> = window
            .points
            .iter()
            .map(|p| [month_x(p.date), p.upper])
            .collect();
        band.extend(
            window
                .points
                .iter()
                .rev()
                .map(|p| [month_x(p.date), p.lower]),
        );

        // Y range mirrors the reference chart: price extremes with a 5% margin
        let (y_min, y_max) = merged.value_bounds().unwrap_or((0.0, 1.0));
        let y_lo = y_min * PLOT_CONFIG.plot_y_lower_margin_pct;
        let y_hi = y_max * PLOT_CONFIG.plot_y_upper_margin_pct;

        let x_min = combined.first().map(|p| p[0]).unwrap_or(0.0);
        let x_max = combined.last().map(|p| p[0]).unwrap_or(1.0);

        let date_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.axis_date)
            .formatter(|mark, _range| month_label(mark.value))
            .placement(VPlacement::Bottom);

        // Leave room below for the table
        let plot_height = (ui.available_height() * 0.55).max(240.0);

        Plot::new("forecast_plot")
            .height(plot_height)
            .custom_x_axes(vec![date_axis])
            .y_axis_label(UI_TEXT.axis_price)
            .legend(Legend::default().position(Corner::LeftTop))
            .label_formatter(|name, point| {
                if name.is_empty() {
                    return String::new();
                }
                format!(
                    "{}\n{} {:.2}",
                    month_label(point.x.round()),
                    UI_TEXT.hover_price_prefix,
                    point.y
                )
            })
            .x_grid_spacer(|input| month_grid_marks(input.bounds))
            .allow_scroll(false)
            .allow_drag(Vec2b { x: true, y: false })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min - 0.5..=x_max + 0.5);
                plot_ui.set_plot_bounds_y(y_lo..=y_hi);

                if band.len() >= 3 {
                    plot_ui.polygon(
                        Polygon::new(UI_TEXT.legend_confidence, PlotPoints::new(band))
                            .fill_color(PLOT_CONFIG.confidence_fill_color)
                            .stroke(Stroke::new(0.0, Color32::TRANSPARENT)),
                    );
                }

                plot_ui.line(
                    Line::new(UI_TEXT.legend_historical, PlotPoints::new(combined))
                        .color(PLOT_CONFIG.historical_line_color)
                        .width(PLOT_CONFIG.historical_line_width),
                );

                if forecast.len() >= 2 {
                    plot_ui.line(
                        Line::new(UI_TEXT.legend_forecast, PlotPoints::new(forecast))
                            .color(PLOT_CONFIG.forecast_line_color)
                            .width(PLOT_CONFIG.forecast_line_width),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_x_roundtrips_through_label() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(month_label(month_x(date)), "Dec-2024");
    }

    #[test]
    fn test_fractional_grid_values_get_no_label() {
        assert_eq!(month_label(24299.5), "");
    }

    #[test]
    fn test_grid_marks_are_whole_month_steps() {
        let marks = month_grid_marks((24290.0, 24302.0));
        assert!(!marks.is_empty());
        for m in &marks {
            assert_eq!(m.value.fract(), 0.0);
        }
    }
}
