//! Configuration types.
//!
//! Configuration lives in `config.toml` under the platform config directory
//! (`~/.config/rowscope/config.toml` on Linux). Every field has a default, so
//! a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::view::{PresentationMode, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_DELTA};

/// Largest accepted `view.window_delta`.
pub const MAX_WINDOW_DELTA: usize = 50;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// View settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Record source settings
    #[serde(default)]
    pub records: RecordsConfig,
}

/// Initial view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Mode the engine starts in.
    pub mode: PresentationMode,

    /// Rows per page in paged mode.
    pub page_size: usize,

    /// Pages shown either side of the current one in the page picker.
    pub window_delta: usize,

    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: PresentationMode::Paged,
            page_size: DEFAULT_PAGE_SIZE,
            window_delta: DEFAULT_WINDOW_DELTA,
            page_size_options: vec![10, 20, 50],
        }
    }
}

/// Where records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// JSON file holding an array of records. The sample fixture is used when unset.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.page_size == 0 {
            return Err(ConfigError::Invalid(
                "view.page_size must be greater than zero".to_string(),
            ));
        }
        if self.view.window_delta > MAX_WINDOW_DELTA {
            return Err(ConfigError::Invalid(format!(
                "view.window_delta must be at most {MAX_WINDOW_DELTA}, got {}",
                self.view.window_delta
            )));
        }
        let options = &self.view.page_size_options;
        if options.is_empty() || options.contains(&0) {
            return Err(ConfigError::Invalid(
                "view.page_size_options must be non-empty and must not contain zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rowscope"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}
