use rowscope_core::{ConfigError, StoreError, ViewError};
use thiserror::Error;

/// Startup and I/O failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record error: {0}")]
    Store(#[from] StoreError),

    #[error("View error: {0}")]
    View(#[from] ViewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
