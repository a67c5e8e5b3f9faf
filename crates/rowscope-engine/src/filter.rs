//! Filter Evaluator.

use rowscope_core::{FilterCriteria, Record};

/// Apply criteria to records, preserving input order.
///
/// Until a filter has been applied the input passes through untouched,
/// whatever the criteria hold. Criteria with every field unset do the same.
pub fn apply<'a>(
    criteria: &FilterCriteria,
    filters_applied: bool,
    records: &'a [Record],
) -> Vec<&'a Record> {
    if !filters_applied || criteria.is_unconstrained() {
        return records.iter().collect();
    }
    records.iter().filter(|r| matches(criteria, r)).collect()
}

/// Check a single record against the criteria.
///
/// An inverted bound pair (min > max, from > to) simply admits nothing.
pub fn matches(criteria: &FilterCriteria, record: &Record) -> bool {
    if let Some(min) = criteria.balance_min {
        if record.balance < min {
            return false;
        }
    }
    if let Some(max) = criteria.balance_max {
        if record.balance > max {
            return false;
        }
    }

    if let Some(range) = &criteria.date_range {
        if let Some(from) = range.from {
            if record.registered_at < from {
                return false;
            }
        }
        if let Some(to) = range.to_end_of_day() {
            if record.registered_at > to {
                return false;
            }
        }
    }

    criteria.status.map_or(true, |s| s.admits(record.active))
}
