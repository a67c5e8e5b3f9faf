//! Sort key types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// A sortable record field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Email,
    Balance,
    RegisteredAt,
    Active,
}

impl SortField {
    /// All sortable fields, in column order.
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Email,
        SortField::Balance,
        SortField::RegisteredAt,
        SortField::Active,
    ];

    /// Canonical field name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Balance => "balance",
            SortField::RegisteredAt => "registered_at",
            SortField::Active => "active",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            "balance" => Ok(SortField::Balance),
            "registered_at" | "registeredAt" | "registerAt" => Ok(SortField::RegisteredAt),
            "active" | "status" => Ok(SortField::Active),
            other => Err(ViewError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The single active sort key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a field.
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a field.
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Next sort state after the user picks `field`.
    ///
    /// Picking the active field cycles asc → desc → none. Picking any other
    /// field replaces the current key and starts ascending.
    pub fn cycle(current: Option<SortSpec>, field: SortField) -> Option<SortSpec> {
        match current {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Asc => Some(SortSpec::desc(field)),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec::asc(field)),
        }
    }
}
