#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and make_demo_models.rs)
pub use crate::models::SeasonalDriftModel;
pub use config::PERSISTENCE;
pub use ui::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the model artifacts and the historical price CSV
    #[arg(long, default_value = ".")]
    pub data_dir: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
