use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::PERSISTENCE;
use crate::forecast::{ForecastError, Result};
use crate::models::HistoricalPoint;

/// Read contract for the historical dataset: "return the last N recorded
/// observations as an ordered-by-date sequence".
pub trait HistoricalReader {
    /// The trailing `n` observations. A dataset with fewer rows degrades
    /// gracefully to whatever is available (tested, not accidental).
    fn historical_tail(&self, n: usize) -> Result<Vec<HistoricalPoint>>;
}

#[derive(Debug, Deserialize)]
struct HistoricalRecord {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Sugar Price")]
    price: f64,
}

/// CSV-backed store for the recorded sugar prices. The file is chronological;
/// rows are consumed in file order.
pub struct HistoricalStore {
    csv_path: PathBuf,
}

impl HistoricalStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            csv_path: data_dir.join(PERSISTENCE.artifacts.historical_filename),
        }
    }
}

impl HistoricalReader for HistoricalStore {
    fn historical_tail(&self, n: usize) -> Result<Vec<HistoricalPoint>> {
        let file = File::open(&self.csv_path)?;
        let all = parse_records(file)?;
        let skip = all.len().saturating_sub(n);
        Ok(all[skip..].to_vec())
    }
}

fn parse_records<R: io::Read>(reader: R) -> Result<Vec<HistoricalPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Validate the schema up front for a clear error instead of a row-level one
    let headers = csv_reader.headers()?.clone();
    for required in ["Date", "Sugar Price"] {
        if !headers.iter().any(|h| h == required) {
            return Err(ForecastError::MissingColumn(required));
        }
    }

    let mut points = Vec::new();
    for record in csv_reader.deserialize::<HistoricalRecord>() {
        let record = record?;
        points.push(HistoricalPoint {
            date: record.date,
            value: record.price,
        });
    }
    Ok(points)
}
