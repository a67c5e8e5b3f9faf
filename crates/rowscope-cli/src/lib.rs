//! Terminal frontend for the Rowscope view engine.

pub mod cli;
pub mod command;
pub mod error;
pub mod render;
pub mod session;

use rowscope_core::fixture::{sample_records, SAMPLE_SIZE};
use rowscope_core::AppConfig;
use rowscope_engine::{RecordStore, ViewEngine};

pub use cli::Cli;
pub use error::{AppError, AppResult};

/// Resolve configuration: an explicit file, or the default location.
pub fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Build the engine over the configured records, or the sample set.
pub fn build_engine(config: &AppConfig) -> AppResult<ViewEngine> {
    let store = match &config.records.path {
        Some(path) => RecordStore::from_path(path)?,
        None => {
            tracing::info!("No record file configured, using {} sample records", SAMPLE_SIZE);
            RecordStore::new(sample_records(SAMPLE_SIZE))?
        }
    };
    Ok(ViewEngine::with_config(store, &config.view)?)
}
