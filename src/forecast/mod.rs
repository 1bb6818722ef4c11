//! The forecast pipeline: range validation, window construction, series merge.

mod error;
mod merge;
mod request;
mod window;

pub use error::{ForecastError, Result};
pub use merge::merge;
pub use request::{ForecastOutcome, run_forecast};
pub use window::build_window;
