//! View Orchestrator pipeline.
//!
//! filter → sort → mode slice → selection flags → counts and page window.
//! Everything here is a pure function of the store and the state.

use rowscope_core::{CheckState, FilterCriteria, SortSpec};

use crate::filter;
use crate::mode::{page_bounds, ModeController};
use crate::pagination;
use crate::selection::SelectionTracker;
use crate::snapshot::{ViewSnapshot, VisibleRow};
use crate::sort;
use crate::store::RecordStore;

/// The explicitly modeled engine state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub filters_applied: bool,
    pub sort: Option<SortSpec>,
    pub mode: ModeController,
    pub selection: SelectionTracker,
}

/// Compute the snapshot for `state`.
///
/// An out-of-range page index is clamped to the last page in the result;
/// `state` itself is not touched.
pub fn project(store: &RecordStore, state: &ViewState, window_delta: usize) -> ViewSnapshot {
    let filtered = filter::apply(&state.criteria, state.filters_applied, store.records());
    let sorted = sort::sort(state.sort, filtered);
    let total_filtered = sorted.len();

    let mut mode = state.mode.clone();
    mode.clamp_page(total_filtered);

    let page = mode.slice(&sorted);
    let rows: Vec<VisibleRow> = page
        .iter()
        .map(|record| VisibleRow {
            record: (*record).clone(),
            selected: state.selection.is_selected(&record.id),
        })
        .collect();

    let selected_filtered_count = sorted
        .iter()
        .filter(|r| state.selection.is_selected(&r.id))
        .count();
    let visible_selected = rows.iter().filter(|r| r.selected).count();

    let page_index = mode.page_index();
    let total_pages = mode.total_pages(total_filtered);
    let pagination_window = mode
        .mode()
        .is_paged()
        .then(|| pagination::window(page_index + 1, total_pages, window_delta));

    let range = if rows.is_empty() {
        None
    } else {
        let (start, end) = page_bounds(
            total_filtered,
            page_index,
            mode.effective_page_size(total_filtered),
        );
        Some((start + 1, end))
    };

    ViewSnapshot {
        total_records: store.len(),
        total_filtered,
        visible_count: rows.len(),
        selected_count: state.selection.count(),
        selected_filtered_count,
        mode: mode.mode(),
        page_index,
        page_size: mode.effective_page_size(total_filtered),
        total_pages,
        pagination_window,
        range,
        can_previous: mode.mode().is_paged() && page_index > 0,
        can_next: mode.mode().is_paged() && page_index + 1 < total_pages,
        select_all: CheckState::from_counts(visible_selected, rows.len()),
        filters_applied: state.filters_applied,
        sort: state.sort,
        rows,
    }
}
