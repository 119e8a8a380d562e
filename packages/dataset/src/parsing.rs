//! Parsing utilities for raw incident fields.
//!
//! Every helper returns `Option` — a field that fails to parse degrades to
//! `None` and the caller decides whether that drops the row (age,
//! coordinates) or only nulls a derived field (occurrence date).

use chrono::{NaiveDate, NaiveDateTime};

/// Parses a victim age, truncating toward zero if the raw value carries a
/// fractional part. Returns `None` if missing or unparseable.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_age(raw: Option<&String>) -> Option<i32> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(age) = s.parse::<i32>() {
        return Some(age);
    }
    s.parse::<f64>().ok().map(|age| age as i32)
}

/// Parses a coordinate component. Returns `None` if missing or unparseable.
#[must_use]
pub fn parse_coordinate(raw: Option<&String>) -> Option<f64> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Parses an occurrence date in the LAPD export's datetime format
/// (`MM/DD/YYYY hh:mm:ss AM/PM`), falling back to plain `MM/DD/YYYY` and ISO
/// `YYYY-MM-DD`. Returns `None` on any other shape.
#[must_use]
pub fn parse_occurred_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%m/%d/%Y %I:%M:%S %p") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(date);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses the raw HHMM time encoding. Missing or unparseable values degrade
/// to 0; values outside [0, 2359] are kept as-is (no bounds validation).
#[must_use]
pub fn parse_time_occ(raw: Option<&String>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok()).unwrap_or(0)
}

/// Month period label (`YYYY-MM`) for a parsed occurrence date.
#[must_use]
pub fn month_period(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
