//! View-state engine for the Rowscope table browser.
//!
//! This crate turns records × filter × sort × mode × selection into the rows
//! a table shows:
//! - Record store (immutable, injected)
//! - Filter evaluator and sort comparator (pure functions)
//! - Mode controller and pagination window
//! - Id-keyed selection tracker
//! - The ViewEngine that recomputes and broadcasts a snapshot after every change

pub mod engine;
pub mod filter;
pub mod mode;
pub mod pagination;
pub mod selection;
pub mod snapshot;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use engine::{project, ViewEngine, ViewState};
pub use mode::ModeController;
pub use selection::SelectionTracker;
pub use snapshot::{ViewSnapshot, VisibleRow};
pub use store::RecordStore;

// Re-export rowscope_core types for convenience
pub use rowscope_core::{
    CheckState, FilterCriteria, FilterInputs, PageMarker, PresentationMode, Record, RecordId,
    SortDirection, SortField, SortSpec, ViewError, ViewMode, ViewResult,
};
