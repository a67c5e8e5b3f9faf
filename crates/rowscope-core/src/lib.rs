//! Core types for the Rowscope table browser.
//!
//! This crate contains shared data structures used across all Rowscope crates:
//! - Record types
//! - Filter criteria and sort keys
//! - Presentation modes and page markers
//! - Select-all checkbox state
//! - Configuration types
//! - Error types
//! - Sample records

mod config;
mod criteria;
mod error;
pub mod fixture;
mod record;
mod selection;
mod sort;
mod view;

pub use config::{config_dir, config_path, AppConfig, RecordsConfig, ViewConfig, MAX_WINDOW_DELTA};
pub use criteria::{
    end_of_day, parse_bound, parse_date, DateRange, FilterCriteria, FilterInputs, StatusFilter,
};
pub use error::{ConfigError, StoreError, ViewError, ViewResult};
pub use record::{Record, RecordId};
pub use selection::CheckState;
pub use sort::{SortDirection, SortField, SortSpec};
pub use view::{PageMarker, PresentationMode, ViewMode, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_DELTA};
