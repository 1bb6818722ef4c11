//! File persistence and artifact location configuration
use crate::domain::ForecastMode;

/// Configuration for the on-disk model artifacts and dataset
pub struct ArtifactConfig {
    /// Base filename for model artifacts (without the mode suffix or extension)
    pub model_filename_base: &'static str,
    /// Filename of the historical price dataset (CSV)
    pub historical_filename: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub artifacts: ArtifactConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    artifacts: ArtifactConfig {
        model_filename_base: "forecasting-model",
        historical_filename: "final_sugar_price_forecasting_data.csv",
    },
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
};

/// Generate mode-specific model artifact filename
/// Example: "forecasting-model_short-term.json"
pub fn model_artifact_filename(mode: ForecastMode) -> String {
    format!(
        "{}_{}.json",
        PERSISTENCE.artifacts.model_filename_base,
        mode.file_tag()
    )
}
