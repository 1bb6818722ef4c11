//! Forecast window and historical context configuration.

/// Configuration for the forecast request pipeline
pub struct ForecastingConfig {
    /// How many trailing historical observations are plotted as context.
    /// Fixed regardless of the selected forecast range.
    pub historical_tail_len: usize,
    /// Upper bound (months) for a short-term forecast horizon
    pub short_term_max_months: u32,
    /// Lower bound (months) for a long-term forecast horizon
    pub long_term_min_months: u32,
    /// Decimal places for all displayed prices and bounds
    pub display_decimals: u32,
}

pub const FORECASTING: ForecastingConfig = ForecastingConfig {
    historical_tail_len: 23,
    short_term_max_months: 6,
    long_term_min_months: 7,
    display_decimals: 2,
};
