//! Select-all checkbox state.

use serde::{Deserialize, Serialize};

/// Tri-state reported for a "select all" checkbox.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// No visible row is selected (also reported when nothing is visible).
    #[default]
    None,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    /// Every visible row is selected.
    All,
}

impl CheckState {
    /// Derive the state from how many of `visible` rows are selected.
    pub fn from_counts(selected: usize, visible: usize) -> Self {
        if visible == 0 || selected == 0 {
            CheckState::None
        } else if selected >= visible {
            CheckState::All
        } else {
            CheckState::Indeterminate
        }
    }
}
