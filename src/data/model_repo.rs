use std::{fs::File, io::BufReader, path::Path};

use crate::config::model_artifact_filename;
use crate::domain::ForecastMode;
use crate::forecast::Result;
use crate::models::{ForecastModel, SeasonalDriftModel};

/// Selection contract: mode -> pre-fitted model. Kept as a trait so the request
/// handler can be exercised with test doubles.
pub trait ModelLookup {
    fn model_for(&self, mode: ForecastMode) -> &dyn ForecastModel;
}

/// Holds both deserialized model artifacts for the lifetime of the app.
/// Loaded once at startup; the artifacts are read-only from here on.
pub struct ModelRepository {
    short_term: SeasonalDriftModel,
    long_term: SeasonalDriftModel,
}

impl ModelRepository {
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(Self {
            short_term: load_artifact(data_dir, ForecastMode::ShortTerm)?,
            long_term: load_artifact(data_dir, ForecastMode::LongTerm)?,
        })
    }
}

impl ModelLookup for ModelRepository {
    fn model_for(&self, mode: ForecastMode) -> &dyn ForecastModel {
        match mode {
            ForecastMode::ShortTerm => &self.short_term,
            ForecastMode::LongTerm => &self.long_term,
        }
    }
}

fn load_artifact(data_dir: &Path, mode: ForecastMode) -> Result<SeasonalDriftModel> {
    let path = data_dir.join(model_artifact_filename(mode));
    log::info!("Loading {} model artifact: {}", mode, path.display());
    let file = File::open(&path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
