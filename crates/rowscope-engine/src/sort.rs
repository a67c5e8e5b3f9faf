//! Sort Comparator.

use std::cmp::Ordering;

use rowscope_core::{Record, SortDirection, SortField, SortSpec};

/// Order rows by the sort spec. `None` leaves the input as it is.
///
/// Uses a stable sort: rows with equal keys keep their input order in both
/// directions.
pub fn sort<'a>(spec: Option<SortSpec>, mut rows: Vec<&'a Record>) -> Vec<&'a Record> {
    if let Some(spec) = spec {
        rows.sort_by(|a, b| compare(spec, a, b));
    }
    rows
}

/// Compare two records under a sort spec.
pub fn compare(spec: SortSpec, a: &Record, b: &Record) -> Ordering {
    let ordering = compare_field(spec.field, a, b);
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Natural ordering of a single field.
fn compare_field(field: SortField, a: &Record, b: &Record) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Balance => a.balance.total_cmp(&b.balance),
        SortField::RegisteredAt => a.registered_at.cmp(&b.registered_at),
        SortField::Active => a.active.cmp(&b.active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, name: &str, balance: f64, day: u32, active: bool) -> Record {
        let at = NaiveDate::from_ymd_opt(2024, 2, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Record::new(id, name, balance, format!("{}@example.com", name.to_lowercase()), at, active)
    }

    fn records() -> Vec<Record> {
        vec![
            record("1", "Carol", 30.0, 3, true),
            record("2", "alice", 10.0, 1, false),
            record("3", "Bob", 30.0, 2, true),
            record("4", "Alice", 20.0, 4, false),
        ]
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_none_is_identity() {
        let records = records();
        let rows = sort(None, records.iter().collect());
        assert_eq!(ids(&rows), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_name_is_lexicographic() {
        let records = records();
        let rows = sort(Some(SortSpec::asc(SortField::Name)), records.iter().collect());
        assert_eq!(ids(&rows), vec!["4", "3", "1", "2"]);
    }

    #[test]
    fn test_balance_desc_is_stable() {
        let records = records();
        let rows = sort(Some(SortSpec::desc(SortField::Balance)), records.iter().collect());
        // 1 and 3 tie on 30.0 and keep their input order.
        assert_eq!(ids(&rows), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn test_registered_at_chronological() {
        let records = records();
        let rows = sort(Some(SortSpec::asc(SortField::RegisteredAt)), records.iter().collect());
        assert_eq!(ids(&rows), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_active_false_before_true() {
        let records = records();
        let rows = sort(Some(SortSpec::asc(SortField::Active)), records.iter().collect());
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3"]);

        let rows = sort(Some(SortSpec::desc(SortField::Active)), records.iter().collect());
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);
    }
}
