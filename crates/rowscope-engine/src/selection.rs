//! Selection Tracker.
//!
//! Selection is keyed by record id, never by position, so it survives
//! filtering, sorting and paging. Ids that are currently filtered out stay
//! selected until something explicitly removes them.

use std::collections::HashSet;

use rowscope_core::{CheckState, RecordId};

/// Set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<RecordId>,
}

impl SelectionTracker {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of one id. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Toggle a whole scope of visible ids as one checkbox would.
    ///
    /// If every id in `visible` is already selected they are all removed;
    /// otherwise they are all added. Ids outside `visible` are untouched.
    /// Returns the resulting checkbox state for the scope.
    pub fn toggle_all_visible<'a, I>(&mut self, visible: I) -> CheckState
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let visible: Vec<&RecordId> = visible.into_iter().collect();
        if visible.is_empty() {
            return CheckState::None;
        }

        if self.check_state(visible.iter().copied()) == CheckState::All {
            for id in &visible {
                self.selected.remove(*id);
            }
            CheckState::None
        } else {
            self.selected.extend(visible.into_iter().cloned());
            CheckState::All
        }
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids, visible or not.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Tri-state for a select-all checkbox over `visible`.
    pub fn check_state<'a, I>(&self, visible: I) -> CheckState
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let mut total = 0;
        let mut selected = 0;
        for id in visible {
            total += 1;
            if self.selected.contains(id) {
                selected += 1;
            }
        }
        CheckState::from_counts(selected, total)
    }

    /// Iterate selected ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.selected.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<RecordId> {
        raw.iter().map(|s| RecordId::from(*s)).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionTracker::new();
        let id = RecordId::from("1");

        assert!(selection.toggle(&id));
        assert!(selection.is_selected(&id));
        assert_eq!(selection.count(), 1);

        assert!(!selection.toggle(&id));
        assert!(!selection.is_selected(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_visible_adds_then_removes() {
        let mut selection = SelectionTracker::new();
        let page = ids(&["1", "2", "3"]);

        assert_eq!(selection.toggle_all_visible(&page), CheckState::All);
        assert_eq!(selection.count(), 3);

        assert_eq!(selection.toggle_all_visible(&page), CheckState::None);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_visible_from_partial_selects_rest() {
        let mut selection = SelectionTracker::new();
        let page = ids(&["1", "2", "3"]);
        selection.toggle(&page[1]);
        assert_eq!(selection.check_state(&page), CheckState::Indeterminate);

        selection.toggle_all_visible(&page);
        assert_eq!(selection.check_state(&page), CheckState::All);
    }

    #[test]
    fn test_toggle_all_visible_leaves_hidden_ids() {
        let mut selection = SelectionTracker::new();
        let hidden = RecordId::from("99");
        selection.toggle(&hidden);

        let page = ids(&["1", "2"]);
        selection.toggle_all_visible(&page);
        selection.toggle_all_visible(&page);

        assert!(selection.is_selected(&hidden));
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_toggle_all_visible_empty_scope() {
        let mut selection = SelectionTracker::new();
        selection.toggle(&RecordId::from("5"));
        let empty: Vec<RecordId> = Vec::new();
        assert_eq!(selection.toggle_all_visible(&empty), CheckState::None);
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_check_state() {
        let mut selection = SelectionTracker::new();
        let page = ids(&["1", "2"]);
        assert_eq!(selection.check_state(&page), CheckState::None);

        selection.toggle(&page[0]);
        assert_eq!(selection.check_state(&page), CheckState::Indeterminate);

        selection.toggle(&page[1]);
        assert_eq!(selection.check_state(&page), CheckState::All);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionTracker::new();
        selection.toggle_all_visible(&ids(&["1", "2", "3"]));
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }
}
