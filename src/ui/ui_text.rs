//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,

    // --- Sidebar ---
    pub mode_heading: &'static str,
    pub mode_prompt: &'static str,
    pub range_heading: &'static str,
    pub label_start_date: &'static str,
    pub label_end_date: &'static str,

    // --- Errors ---
    pub error_invalid_range: &'static str,
    pub error_data_load_prefix: &'static str,

    // --- Chart ---
    pub chart_heading_prefix: &'static str,
    pub legend_historical: &'static str,
    pub legend_forecast: &'static str,
    pub legend_confidence: &'static str,
    pub axis_date: &'static str,
    pub axis_price: &'static str,
    pub hover_price_prefix: &'static str,

    // --- Table ---
    pub table_heading_prefix: &'static str,
    pub th_date: &'static str,
    pub th_price: &'static str,
    pub th_kind: &'static str,
    pub th_lower: &'static str,
    pub th_upper: &'static str,
    pub missing_value: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Indian Sugar Price Forecasting",

    mode_heading: "Forecasting Time Horizon",
    mode_prompt: "Select the time horizon for Sugar Price forecasts:",
    range_heading: "Select Date Range for Forecast",
    label_start_date: "Start Date",
    label_end_date: "End Date",

    error_invalid_range:
        "Error: Start Date cannot be equal to or greater than End Date. Please change your dates!",
    error_data_load_prefix: "Failed to load data:",

    chart_heading_prefix: "Line Chart for prediction",
    legend_historical: "Historical Sugar Price",
    legend_forecast: "Forecasted Sugar Price",
    legend_confidence: "Confidence Interval",
    axis_date: "Date",
    axis_price: "Sugar Price",
    hover_price_prefix: "Sugar Price: Rs.",

    table_heading_prefix: "Table for prediction",
    th_date: "Date",
    th_price: "Sugar Price",
    th_kind: "Type",
    th_lower: "Conf Int (Lower)",
    th_upper: "Conf Int (Upper)",
    missing_value: "-",
};
