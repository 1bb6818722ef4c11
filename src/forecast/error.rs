use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Start Date cannot be equal to or greater than End Date ({start} >= {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The model returned a different number of forecasts than the requested horizon.
    /// Fatal integration fault: never truncated or padded over.
    #[error("model returned {got} forecasts for a horizon of {expected}")]
    ModelIntegration { expected: usize, got: usize },

    #[error("model returned no confidence intervals")]
    MissingIntervals,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("model artifact error: {0}")]
    Artifact(#[from] serde_json::Error),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
