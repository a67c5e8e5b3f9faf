//! View Mode Controller.
//!
//! Holds the presentation mode and paging parameters and decides which slice
//! of the sorted rows is exposed. The page size survives a round trip through
//! continuous mode; the page index never does.

use rowscope_core::{PresentationMode, ViewError, ViewMode, ViewResult, DEFAULT_PAGE_SIZE};

/// Presentation mode state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeController {
    mode: ViewMode,
    /// Page size to restore when returning to paged mode.
    page_size: usize,
}

impl ModeController {
    /// Start in the given mode with the given page size.
    pub fn new(kind: PresentationMode, page_size: usize) -> ViewResult<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize(page_size));
        }
        let mut controller = Self {
            mode: ViewMode::Continuous,
            page_size,
        };
        controller.set_mode(kind);
        Ok(controller)
    }

    /// The active mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The active mode's kind.
    pub fn kind(&self) -> PresentationMode {
        self.mode.kind()
    }

    /// Rows per page in paged mode (remembered while continuous).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 0-based page index. Always 0 in continuous mode.
    pub fn page_index(&self) -> usize {
        match self.mode {
            ViewMode::Paged { page_index, .. } => page_index,
            ViewMode::Continuous => 0,
        }
    }

    /// Switch mode. The page index resets to 0 in every case.
    pub fn set_mode(&mut self, kind: PresentationMode) {
        self.mode = match kind {
            PresentationMode::Paged => ViewMode::Paged {
                page_index: 0,
                page_size: self.page_size,
            },
            PresentationMode::Continuous => ViewMode::Continuous,
        };
    }

    /// Jump to a page. Returns `false` (and changes nothing) in continuous mode.
    pub fn set_page(&mut self, index: usize) -> bool {
        match &mut self.mode {
            ViewMode::Paged { page_index, .. } => {
                *page_index = index;
                true
            }
            ViewMode::Continuous => false,
        }
    }

    /// Change rows per page. The page index is left alone.
    ///
    /// Returns `Ok(false)` in continuous mode.
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<bool> {
        if size == 0 {
            return Err(ViewError::InvalidPageSize(size));
        }
        match &mut self.mode {
            ViewMode::Paged { page_size, .. } => {
                *page_size = size;
                self.page_size = size;
                Ok(true)
            }
            ViewMode::Continuous => Ok(false),
        }
    }

    /// Rows reported as the page size: the full length when continuous.
    pub fn effective_page_size(&self, total: usize) -> usize {
        match self.mode {
            ViewMode::Paged { page_size, .. } => page_size,
            ViewMode::Continuous => total,
        }
    }

    /// Number of pages for `total` rows, never less than one.
    pub fn total_pages(&self, total: usize) -> usize {
        match self.mode {
            ViewMode::Paged { page_size, .. } => total_pages(total, page_size),
            ViewMode::Continuous => 1,
        }
    }

    /// Pull an out-of-range page index back to the last page.
    ///
    /// Returns the index that was replaced, if any.
    pub fn clamp_page(&mut self, total: usize) -> Option<usize> {
        let last = self.total_pages(total) - 1;
        match &mut self.mode {
            ViewMode::Paged { page_index, .. } if *page_index > last => {
                let previous = *page_index;
                *page_index = last;
                Some(previous)
            }
            _ => None,
        }
    }

    /// Window of `rows` exposed by the current mode.
    pub fn slice<'r, T>(&self, rows: &'r [T]) -> &'r [T] {
        match self.mode {
            ViewMode::Paged {
                page_index,
                page_size,
            } => {
                let (start, end) = page_bounds(rows.len(), page_index, page_size);
                &rows[start..end]
            }
            ViewMode::Continuous => rows,
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self {
            mode: ViewMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Half-open row range `[page_index*page_size, +page_size)` clamped to `len`.
pub fn page_bounds(len: usize, page_index: usize, page_size: usize) -> (usize, usize) {
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_paged_slice() {
        let mut mode = ModeController::new(PresentationMode::Paged, 10).unwrap();
        let data = rows(25);

        assert_eq!(mode.slice(&data), &data[0..10]);

        mode.set_page(2);
        assert_eq!(mode.slice(&data), &data[20..25]);

        // Past the end yields an empty window until clamped.
        mode.set_page(5);
        assert!(mode.slice(&data).is_empty());
        assert_eq!(mode.clamp_page(data.len()), Some(5));
        assert_eq!(mode.page_index(), 2);
        assert_eq!(mode.clamp_page(data.len()), None);
    }

    #[test]
    fn test_continuous_exposes_everything() {
        let mode = ModeController::new(PresentationMode::Continuous, 10).unwrap();
        let data = rows(25);
        assert_eq!(mode.slice(&data).len(), 25);
        assert_eq!(mode.effective_page_size(data.len()), 25);
        assert_eq!(mode.total_pages(data.len()), 1);
    }

    #[test]
    fn test_mode_switch_resets_page() {
        let mut mode = ModeController::new(PresentationMode::Paged, 10).unwrap();
        mode.set_page(3);
        assert_eq!(mode.page_index(), 3);

        mode.set_mode(PresentationMode::Continuous);
        mode.set_mode(PresentationMode::Paged);
        assert_eq!(mode.page_index(), 0);

        mode.set_page(2);
        mode.set_mode(PresentationMode::Paged);
        assert_eq!(mode.page_index(), 0);
    }

    #[test]
    fn test_page_size_survives_continuous() {
        let mut mode = ModeController::new(PresentationMode::Paged, 10).unwrap();
        assert!(mode.set_page_size(20).unwrap());
        mode.set_mode(PresentationMode::Continuous);
        mode.set_mode(PresentationMode::Paged);
        assert_eq!(
            mode.mode(),
            ViewMode::Paged {
                page_index: 0,
                page_size: 20
            }
        );
    }

    #[test]
    fn test_paged_calls_ignored_when_continuous() {
        let mut mode = ModeController::new(PresentationMode::Continuous, 10).unwrap();
        assert!(!mode.set_page(4));
        assert!(!mode.set_page_size(30).unwrap());
        assert_eq!(mode.mode(), ViewMode::Continuous);
        assert_eq!(mode.page_size(), 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            ModeController::new(PresentationMode::Paged, 0),
            Err(ViewError::InvalidPageSize(0))
        ));
        let mut mode = ModeController::default();
        assert!(mode.set_page_size(0).is_err());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_page_bounds_clamped() {
        assert_eq!(page_bounds(25, 0, 10), (0, 10));
        assert_eq!(page_bounds(25, 2, 10), (20, 25));
        assert_eq!(page_bounds(25, 9, 10), (25, 25));
        assert_eq!(page_bounds(0, 0, 10), (0, 0));
    }
}
