//! Configuration module for the forecasting dashboard.

// Can all be private now because we have a public re-export.
mod forecasting;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use forecasting::FORECASTING;
pub use persistence::{PERSISTENCE, model_artifact_filename};
