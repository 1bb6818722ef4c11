mod historical;
mod model_repo;

pub use historical::{HistoricalReader, HistoricalStore};
pub use model_repo::{ModelLookup, ModelRepository};
