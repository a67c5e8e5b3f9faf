//! Record and RecordId types for the table rows.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Stable record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record is one row of user data in the store.
///
/// Records are immutable once the store is built; the engine only ever
/// borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique, stable identifier.
    pub id: RecordId,

    /// Display name.
    pub name: String,

    /// Account balance.
    pub balance: f64,

    /// Contact email.
    pub email: String,

    /// Registration timestamp (calendar-local).
    #[serde(alias = "registerAt")]
    pub registered_at: NaiveDateTime,

    /// Whether the account is active.
    pub active: bool,
}

impl Record {
    /// Create a new record.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        balance: f64,
        email: impl Into<String>,
        registered_at: NaiveDateTime,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            email: email.into(),
            registered_at,
            active,
        }
    }

    /// Human readable status label.
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn registered() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_record_id_conversions() {
        let a = RecordId::from("7");
        let b = RecordId::from("7".to_string());
        assert_eq!(a, b);
        assert_eq!(a.as_ref(), "7");
        assert_eq!(a.to_string(), "7");
    }

    #[test]
    fn test_record_json_shape() {
        let record = Record::new("1", "John Doe", 120.5, "john.doe1@example.com", registered(), true);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["registeredAt"], "2024-01-05T10:00:00");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_accepts_register_at_alias() {
        let json = r#"{
            "id": "9",
            "name": "Jane Smith",
            "balance": 10,
            "email": "jane.smith9@example.com",
            "registerAt": "2024-01-09T00:00:00",
            "active": false
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::from("9"));
        assert_eq!(record.status_label(), "Inactive");
    }
}
