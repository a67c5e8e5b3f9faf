//! Presentation mode and page marker types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pages shown either side of the current one in the page picker.
pub const DEFAULT_WINDOW_DELTA: usize = 2;

/// Presentation mode without its parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// One fixed-size window of rows at a time.
    #[default]
    Paged,
    /// The whole filtered, sorted sequence at once.
    Continuous,
}

impl PresentationMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            PresentationMode::Paged => PresentationMode::Continuous,
            PresentationMode::Continuous => PresentationMode::Paged,
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationMode::Paged => f.write_str("paged"),
            PresentationMode::Continuous => f.write_str("continuous"),
        }
    }
}

impl FromStr for PresentationMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paged" | "pagination" => Ok(PresentationMode::Paged),
            "continuous" | "infinite" => Ok(PresentationMode::Continuous),
            other => Err(ViewError::UnknownMode(other.to_string())),
        }
    }
}

/// Active presentation mode with its paging parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewMode {
    /// `page_index` is 0-based; `page_size` is always > 0.
    Paged { page_index: usize, page_size: usize },
    Continuous,
}

impl ViewMode {
    /// The mode's kind.
    pub fn kind(&self) -> PresentationMode {
        match self {
            ViewMode::Paged { .. } => PresentationMode::Paged,
            ViewMode::Continuous => PresentationMode::Continuous,
        }
    }

    /// Check if this is paged mode.
    pub fn is_paged(&self) -> bool {
        matches!(self, ViewMode::Paged { .. })
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Paged {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One entry in the page picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageMarker {
    /// A 1-based page number.
    Page(usize),
    /// A gap of one or more pages.
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}
