mod date_range;
mod mode;

pub use date_range::DateRange;
pub use mode::ForecastMode;
