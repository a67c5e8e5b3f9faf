//! View Engine
//!
//! The ViewEngine owns all view state and is the only way to change it:
//! - Filter criteria and the "filters applied" flag
//! - The single active sort key
//! - Presentation mode and paging parameters
//! - The id-keyed selection set
//!
//! ## Update Flow
//!
//! ```text
//! public operation
//!        │
//!        ▼
//! mutate one state container
//!        │
//!        ▼
//! project(store, state)
//!   filter → sort → slice → flags → counts
//!        │
//!        ▼
//! write back clamped page index
//!        │
//!        ▼
//! publish snapshot to subscribers
//! ```
//!
//! Every operation finishes the full recomputation before it returns.

use std::sync::Arc;

use tokio::sync::watch;

use rowscope_core::{
    CheckState, FilterCriteria, FilterInputs, PresentationMode, RecordId, SortField, SortSpec,
    ViewConfig, ViewError, ViewMode, ViewResult, DEFAULT_WINDOW_DELTA,
};

use crate::filter;
use crate::mode::ModeController;
use crate::snapshot::ViewSnapshot;
use crate::store::RecordStore;

mod observable_view;
mod projection;

pub use observable_view::ObservableView;
pub use projection::{project, ViewState};

// =============================================================================
// View Engine
// =============================================================================

/// The view-state engine.
///
/// Built over an injected [`RecordStore`]. Read the derived rows with
/// [`ViewEngine::view`] or follow them with [`ViewEngine::subscribe`].
pub struct ViewEngine {
    store: RecordStore,
    state: ViewState,
    window_delta: usize,
    view: ObservableView,
}

impl ViewEngine {
    /// Create an engine in paged mode with default page size and window.
    pub fn new(store: RecordStore) -> Self {
        Self::from_state(store, ViewState::default(), DEFAULT_WINDOW_DELTA)
    }

    /// Create an engine from view configuration.
    pub fn with_config(store: RecordStore, config: &ViewConfig) -> ViewResult<Self> {
        let state = ViewState {
            mode: ModeController::new(config.mode, config.page_size)?,
            ..ViewState::default()
        };
        Ok(Self::from_state(store, state, config.window_delta))
    }

    fn from_state(store: RecordStore, state: ViewState, window_delta: usize) -> Self {
        let initial = project(&store, &state, window_delta);
        tracing::debug!(
            "ViewEngine initialized: {} records, mode {}",
            store.len(),
            state.mode.kind()
        );
        Self {
            store,
            state,
            window_delta,
            view: ObservableView::new(initial),
        }
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// The current derived view.
    pub fn view(&self) -> &ViewSnapshot {
        self.view.current()
    }

    /// Subscribe to view changes.
    ///
    /// The receiver is notified after every operation.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewSnapshot>> {
        self.view.subscribe()
    }

    /// The injected record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    /// Whether a filter has been submitted since the last reset.
    pub fn filters_applied(&self) -> bool {
        self.state.filters_applied
    }

    /// Active sort key.
    pub fn sort(&self) -> Option<SortSpec> {
        self.state.sort
    }

    /// Active mode with paging parameters.
    pub fn mode(&self) -> ViewMode {
        self.state.mode.mode()
    }

    /// Check if a record is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Selected ids in store order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.store
            .iter()
            .filter(|r| self.state.selection.is_selected(&r.id))
            .map(|r| r.id.clone())
            .collect()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Apply filter criteria. Marks filters as applied, even if empty.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        tracing::debug!("Applying filter: {:?}", criteria);
        self.state.criteria = criteria;
        self.state.filters_applied = true;
        self.refresh();
    }

    /// Apply raw filter form inputs. Unparsable fields impose no constraint.
    pub fn apply_filter_inputs(&mut self, inputs: &FilterInputs) {
        self.set_filter_criteria(inputs.to_criteria());
    }

    /// Clear criteria and the applied flag. The active sort is kept.
    pub fn reset_filters(&mut self) {
        tracing::debug!("Resetting filters");
        self.state.criteria = FilterCriteria::none();
        self.state.filters_applied = false;
        self.refresh();
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Pick a sort field, cycling asc → desc → none on repeats.
    pub fn set_sort(&mut self, field: SortField) {
        self.state.sort = SortSpec::cycle(self.state.sort, field);
        tracing::debug!("Sort is now {:?}", self.state.sort);
        self.refresh();
    }

    /// Pick a sort field by name.
    ///
    /// Unknown names are rejected before any state changes.
    pub fn set_sort_by_name(&mut self, name: &str) -> ViewResult<()> {
        let field = name.parse::<SortField>()?;
        self.set_sort(field);
        Ok(())
    }

    // =========================================================================
    // Mode and Paging
    // =========================================================================

    /// Switch presentation mode. The page index resets to 0.
    pub fn set_mode(&mut self, kind: PresentationMode) {
        tracing::debug!("Switching to {} mode", kind);
        self.state.mode.set_mode(kind);
        self.refresh();
    }

    /// Switch presentation mode by name.
    pub fn set_mode_by_name(&mut self, name: &str) -> ViewResult<()> {
        let kind = name.parse::<PresentationMode>()?;
        self.set_mode(kind);
        Ok(())
    }

    /// Flip between paged and continuous.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.mode.kind().toggled());
    }

    /// Jump to a 0-based page, clamped to the last page.
    ///
    /// Returns `false` in continuous mode, where nothing changes.
    pub fn set_page(&mut self, index: usize) -> bool {
        if !self.state.mode.set_page(index) {
            tracing::warn!("Ignoring set_page({}) in continuous mode", index);
            return false;
        }
        tracing::debug!("Page set to {}", index);
        self.refresh();
        true
    }

    /// Change rows per page. The page index is clamped, not reset.
    ///
    /// Returns `Ok(false)` in continuous mode, where nothing changes.
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<bool> {
        if !self.state.mode.set_page_size(size)? {
            tracing::warn!("Ignoring set_page_size({}) in continuous mode", size);
            return Ok(false);
        }
        tracing::debug!("Page size set to {}", size);
        self.refresh();
        Ok(true)
    }

    /// Advance one page. Returns `false` on the last page or when continuous.
    pub fn next_page(&mut self) -> bool {
        let view = self.view();
        if !view.can_next {
            return false;
        }
        let next = view.page_index + 1;
        self.set_page(next)
    }

    /// Go back one page. Returns `false` on the first page or when continuous.
    pub fn previous_page(&mut self) -> bool {
        let view = self.view();
        if !view.can_previous {
            return false;
        }
        let previous = view.page_index - 1;
        self.set_page(previous)
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) -> bool {
        self.set_page(0)
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) -> bool {
        let last = self.view().total_pages - 1;
        self.set_page(last)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flip selection of one record. Returns whether it is now selected.
    ///
    /// The record does not need to be visible, but it must exist.
    pub fn toggle_selection(&mut self, id: &RecordId) -> ViewResult<bool> {
        if !self.store.contains(id) {
            return Err(ViewError::UnknownRecord(id.to_string()));
        }
        let selected = self.state.selection.toggle(id);
        tracing::debug!("Record {} selected: {}", id, selected);
        self.refresh();
        Ok(selected)
    }

    /// Toggle the select-all checkbox.
    ///
    /// Paged mode scopes this to the current page; continuous mode to the
    /// whole filtered set. Returns the checkbox state afterwards.
    pub fn toggle_select_all_visible(&mut self) -> CheckState {
        let scope: Vec<RecordId> = match self.state.mode.mode() {
            ViewMode::Paged { .. } => self.view().visible_ids().cloned().collect(),
            ViewMode::Continuous => filter::apply(
                &self.state.criteria,
                self.state.filters_applied,
                self.store.records(),
            )
            .into_iter()
            .map(|r| r.id.clone())
            .collect(),
        };
        let state = self.state.selection.toggle_all_visible(&scope);
        tracing::debug!(
            "Select-all over {} rows ({} mode): {:?}",
            scope.len(),
            self.state.mode.kind(),
            state
        );
        self.refresh();
        state
    }

    /// Deselect everything, visible or not.
    pub fn clear_selection(&mut self) {
        tracing::debug!("Clearing {} selected records", self.state.selection.count());
        self.state.selection.clear();
        self.refresh();
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Recompute the view from scratch and broadcast it.
    fn refresh(&mut self) {
        let snapshot = project(&self.store, &self.state, self.window_delta);

        if snapshot.page_index != self.state.mode.page_index() {
            tracing::warn!(
                "Page {} out of range for {} rows, clamped to {}",
                self.state.mode.page_index(),
                snapshot.total_filtered,
                snapshot.page_index
            );
            self.state.mode.set_page(snapshot.page_index);
        }

        self.view.publish(snapshot);
    }
}

// =============================================================================
// Tests
// =============================================================================
