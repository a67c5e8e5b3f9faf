//! Derived view types handed to renderers.

use serde::{Deserialize, Serialize};

use rowscope_core::{CheckState, PageMarker, Record, RecordId, SortSpec, ViewMode};

/// A record as it appears in the view, annotated with its selection flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleRow {
    #[serde(flatten)]
    pub record: Record,
    pub selected: bool,
}

impl VisibleRow {
    /// The row's record id.
    pub fn id(&self) -> &RecordId {
        &self.record.id
    }
}

/// The complete renderable projection of the engine state.
///
/// Rebuilt from scratch after every mutation; two engines holding the same
/// state always produce equal snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Rows exposed by the current mode, in display order.
    pub rows: Vec<VisibleRow>,

    /// Records in the store.
    pub total_records: usize,

    /// Records passing the filter.
    pub total_filtered: usize,

    /// Rows in `rows`.
    pub visible_count: usize,

    /// Every selected id, including ones filtered out.
    pub selected_count: usize,

    /// Selected ids that pass the filter.
    pub selected_filtered_count: usize,

    /// Mode after page clamping.
    pub mode: ViewMode,

    /// 0-based page index (0 when continuous).
    pub page_index: usize,

    /// Rows per page; the filtered length when continuous.
    pub page_size: usize,

    /// Page count, at least 1.
    pub total_pages: usize,

    /// Page picker markers. Paged mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_window: Option<Vec<PageMarker>>,

    /// 1-based inclusive row range of `rows` within the filtered set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(usize, usize)>,

    pub can_previous: bool,
    pub can_next: bool,

    /// Select-all checkbox state over `rows`.
    pub select_all: CheckState,

    pub filters_applied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl ViewSnapshot {
    /// Ids of the visible rows in display order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &RecordId> {
        self.rows.iter().map(VisibleRow::id)
    }

    /// Check if the view has no rows to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.page_index + 1
    }
}
