//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Historical price trace
    pub historical_line_color: Color32,
    pub historical_line_width: f32,
    /// Forecast price trace (overlaid on top of the combined line)
    pub forecast_line_color: Color32,
    pub forecast_line_width: f32,
    /// Confidence band fill (light pink, mostly transparent)
    pub confidence_fill_color: Color32,

    pub plot_y_lower_margin_pct: f64, // Y lower limit = min * this
    pub plot_y_upper_margin_pct: f64, // Y upper limit = max * this

    // SEMANTIC COLORS
    pub color_error: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    historical_line_color: Color32::from_rgb(65, 105, 225), // Royal Blue
    historical_line_width: 2.0,

    forecast_line_color: Color32::from_rgb(255, 127, 14), // Plotly Orange
    forecast_line_width: 2.5,

    // Light pink at ~30% opacity so the traces stay readable through the band
    confidence_fill_color: Color32::from_rgba_premultiplied(77, 55, 58, 77),

    // Mirror the 0.95 / 1.05 axis margins of the reference chart
    plot_y_lower_margin_pct: 0.95,
    plot_y_upper_margin_pct: 1.05,

    color_error: Color32::from_rgb(255, 80, 80),
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
