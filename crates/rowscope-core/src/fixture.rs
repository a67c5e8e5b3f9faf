//! Deterministic sample records.
//!
//! Mirrors the demo data set the table was built against: one user per day
//! from 2024-01-01, names cycling through ten first/last name pairs. Balance
//! and status come from a fixed hash of the index so every session sees the
//! same rows.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::record::Record;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Bob", "Alice", "Charlie", "Diana", "Edward", "Fiona", "George", "Helen",
];

const LAST_NAMES: [&str; 10] = [
    "Doe", "Smith", "Johnson", "Brown", "Wilson", "Miller", "Davis", "Clark", "White", "Turner",
];

/// Number of records in the default sample.
pub const SAMPLE_SIZE: usize = 100;

/// Build `count` sample records with ids "1"..=count.
pub fn sample_records(count: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..count)
        .map(|i| {
            let name = format!("{} {}", FIRST_NAMES[i % 10], LAST_NAMES[i % 10]);
            let email = format!("{}{}@example.com", name.to_lowercase().replace(' ', "."), i + 1);
            let day = start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(start);
            let hash = mix(i as u64);

            Record::new(
                (i + 1).to_string(),
                name,
                (hash % 10_000) as f64,
                email,
                day.and_time(NaiveTime::MIN),
                (hash >> 32) % 10 < 7,
            )
        })
        .collect()
}

/// splitmix64 finalizer.
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_shape() {
        let records = sample_records(SAMPLE_SIZE);
        assert_eq!(records.len(), 100);

        let first = &records[0];
        assert_eq!(first.id.as_ref(), "1");
        assert_eq!(first.name, "John Doe");
        assert_eq!(first.email, "john.doe1@example.com");
        assert_eq!(first.registered_at.to_string(), "2024-01-01 00:00:00");

        let last = &records[99];
        assert_eq!(last.name, "Helen Turner");
        assert_eq!(last.registered_at.date().to_string(), "2024-04-09");
    }

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_records(20), sample_records(20));
    }

    #[test]
    fn test_sample_ids_unique_and_balances_in_range() {
        let records = sample_records(SAMPLE_SIZE);
        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), records.len());
        assert!(records.iter().all(|r| (0.0..10_000.0).contains(&r.balance)));
    }

    #[test]
    fn test_sample_mixes_statuses() {
        let records = sample_records(SAMPLE_SIZE);
        let active = records.iter().filter(|r| r.active).count();
        assert!(active > 0 && active < records.len());
    }
}
