//! Pagination Window Computer.
//!
//! Produces the compressed page picker: first page, last page, and `delta`
//! pages either side of the current one, with an ellipsis wherever a run of
//! page numbers is skipped.

use std::collections::BTreeSet;

use rowscope_core::PageMarker;

/// Page markers for a 1-based `current_page` out of `total_pages`.
///
/// `total_pages <= 1` yields just page 1.
pub fn window(current_page: usize, total_pages: usize, delta: usize) -> Vec<PageMarker> {
    let mut pages = BTreeSet::from([1]);

    // Only pages strictly between the first and the last are candidates.
    let low = current_page.saturating_sub(delta).max(2);
    let high = current_page
        .saturating_add(delta)
        .min(total_pages.saturating_sub(1));
    if low <= high {
        pages.extend(low..=high);
    }

    if total_pages > 1 {
        pages.insert(total_pages);
    }

    let mut markers = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if previous.is_some_and(|p| page - p > 1) {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}
