//! Filter criteria types.
//!
//! Criteria arrive from two directions: typed values set programmatically,
//! and raw text from input fields. Raw text never errors; anything that does
//! not parse simply imposes no constraint.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ViewError;

/// Status constraint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only active records.
    Active,
    /// Only inactive records.
    Inactive,
    /// No constraint.
    #[default]
    All,
}

impl StatusFilter {
    /// Check whether a record's `active` flag passes this constraint.
    pub fn admits(self, active: bool) -> bool {
        match self {
            StatusFilter::Active => active,
            StatusFilter::Inactive => !active,
            StatusFilter::All => true,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            "all" => Ok(StatusFilter::All),
            other => Err(ViewError::UnknownStatus(other.to_string())),
        }
    }
}

/// Registration date bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound, compared as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDateTime>,

    /// Inclusive upper bound, widened to the end of its calendar day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    /// Build a range from calendar days: `from` at midnight, `to` kept as a day.
    pub fn days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.map(|d| d.and_time(NaiveTime::MIN)),
            to: to.map(|d| d.and_time(NaiveTime::MIN)),
        }
    }

    /// The effective upper bound: 23:59:59.999 on the day of `to`.
    pub fn to_end_of_day(&self) -> Option<NaiveDateTime> {
        self.to.map(end_of_day)
    }

    /// Check whether both sides are open.
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Normalize a timestamp to the last millisecond of its calendar day.
pub fn end_of_day(at: NaiveDateTime) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    at.date().and_time(last)
}

/// User-supplied constraints for filtering records.
///
/// Every `None` field imposes no constraint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,
}

impl FilterCriteria {
    /// Criteria with no constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the lower balance bound.
    pub fn with_balance_min(mut self, min: f64) -> Self {
        self.balance_min = Some(min);
        self
    }

    /// Set the upper balance bound.
    pub fn with_balance_max(mut self, max: f64) -> Self {
        self.balance_max = Some(max);
        self
    }

    /// Set the registration date range.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Set the status constraint.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether no field imposes a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.balance_min.is_none()
            && self.balance_max.is_none()
            && self.date_range.map_or(true, |r| r.is_open())
            && self.status.map_or(true, |s| s == StatusFilter::All)
    }
}

/// Raw filter form contents, as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub balance_min: String,
    pub balance_max: String,
    pub from: String,
    pub to: String,
    pub status: String,
}

impl FilterInputs {
    /// Convert raw inputs into criteria. Unparsable fields become unset.
    pub fn to_criteria(&self) -> FilterCriteria {
        let from = parse_date(&self.from);
        let to = parse_date(&self.to);
        let date_range = if from.is_none() && to.is_none() {
            None
        } else {
            Some(DateRange::days(from, to))
        };

        FilterCriteria {
            balance_min: parse_bound(&self.balance_min),
            balance_max: parse_bound(&self.balance_max),
            date_range,
            status: self
                .status
                .parse::<StatusFilter>()
                .ok()
                .filter(|s| *s != StatusFilter::All),
        }
    }
}

/// Parse a numeric bound from text. Empty, non-numeric and NaN input is unset.
pub fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse a calendar day (`YYYY-MM-DD`). Anything else is unset.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
