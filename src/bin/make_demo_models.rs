use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::fs::File;
use std::path::Path;

use sugar_scope::SeasonalDriftModel;
use sugar_scope::config::{PERSISTENCE, model_artifact_filename};
use sugar_scope::domain::ForecastMode;
use sugar_scope::utils::{STANDARD_DATE_FORMAT, add_months};

// 4 years of monthly history ending November 2024, so the default forecast
// range (Dec 2024 onward) continues the series seamlessly.
const DEMO_MONTHS: u32 = 48;

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = Path::new(".");

    // 2. Historical dataset
    let csv_path = out_dir.join(PERSISTENCE.artifacts.historical_filename);
    let (last_date, last_price) = write_demo_csv(&csv_path)
        .with_context(|| format!("Failed to write demo CSV: {}", csv_path.display()))?;
    log::info!(
        "Wrote {} months of demo history to {} (last: {} @ {:.2})",
        DEMO_MONTHS,
        csv_path.display(),
        last_date,
        last_price
    );

    // 3. Model artifacts, one per mode
    // The first forecast step is the month after the last recorded observation.
    let cycle_offset = add_months(last_date, 1).month0() as usize;

    for (mode, drift, sigma) in [
        (ForecastMode::ShortTerm, 0.25, 0.9),
        (ForecastMode::LongTerm, 0.18, 1.6),
    ] {
        let model = SeasonalDriftModel {
            level: last_price,
            drift_per_month: drift,
            seasonal: demo_seasonal(),
            sigma,
            z_value: 1.96,
            cycle_offset,
        };

        let path = out_dir.join(model_artifact_filename(mode));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create artifact: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &model)?;
        log::info!("Wrote {} model artifact: {}", mode, path.display());
    }

    Ok(())
}

/// Additive monthly factors, January first. Crushing-season surplus pushes
/// prices down early in the year; the lean monsoon months push them up.
fn demo_seasonal() -> Vec<f64> {
    vec![
        -0.6, -0.8, -0.9, -0.5, 0.0, 0.4, 0.8, 0.9, 0.7, 0.3, -0.1, -0.4,
    ]
}

/// Writes a deterministic trend + seasonal + wobble series.
/// Returns the last (date, price) pair for fitting the demo models.
fn write_demo_csv(path: &Path) -> Result<(NaiveDate, f64)> {
    let first = NaiveDate::from_ymd_opt(2020, 12, 1).expect("valid literal date");
    let seasonal = demo_seasonal();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Date", "Sugar Price"])?;

    let mut last = (first, 0.0);
    for i in 0..DEMO_MONTHS {
        let date = add_months(first, i);
        // Deterministic wobble stands in for market noise
        let wobble = ((i * 7919) % 13) as f64 * 0.1 - 0.6;
        let price = 36.0 + 0.08 * i as f64 + seasonal[date.month0() as usize] + wobble;
        let price = (price * 100.0).round() / 100.0;

        writer.write_record([
            date.format(STANDARD_DATE_FORMAT).to_string(),
            format!("{:.2}", price),
        ])?;
        last = (date, price);
    }
    writer.flush()?;

    Ok(last)
}
