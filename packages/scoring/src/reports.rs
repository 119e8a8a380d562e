//! Aggregation reporters over the matched records.
//!
//! Each reporter is a pure function of the matched slice, independent of the
//! others and of the full dataset. Empty input always yields a well-formed
//! empty output; the presentation layer treats that as "insufficient data",
//! not as an error.

use std::collections::{BTreeMap, HashMap};

use crime_risk_dataset_models::IncidentRecord;
use crime_risk_scoring_models::{Coordinate, CrimeCount, TrendPoint};

/// Maximum number of offense categories returned by [`top_crimes`].
pub const TOP_CRIMES_LIMIT: usize = 5;

/// Counts matched incidents per offense description and returns the top
/// five, descending by count. Ties keep the order in which the descriptions
/// were first encountered in the input. Fewer than five distinct
/// descriptions returns all of them.
#[must_use]
pub fn top_crimes(matched: &[&IncidentRecord]) -> Vec<CrimeCount> {
    // (count, first-encountered index) per description.
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for (index, record) in matched.iter().enumerate() {
        counts
            .entry(record.crime_description.as_str())
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, index));
    }

    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(label, (count, first))| (label, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(TOP_CRIMES_LIMIT);

    ranked
        .into_iter()
        .map(|(label, count, _)| CrimeCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Projects the matched records to their locations, preserving input order.
#[must_use]
pub fn coordinates(matched: &[&IncidentRecord]) -> Vec<Coordinate> {
    matched
        .iter()
        .map(|record| Coordinate {
            lat: record.latitude,
            lon: record.longitude,
        })
        .collect()
}

/// Counts matched incidents per month, excluding records without a parsed
/// month, and returns the series ascending by `YYYY-MM` label (which is
/// chronological order for that format).
#[must_use]
pub fn monthly_trend(matched: &[&IncidentRecord]) -> Vec<TrendPoint> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in matched {
        if let Some(month) = record.month_period.as_deref() {
            *counts.entry(month).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(month, count)| TrendPoint {
            month: month.to_string(),
            count,
        })
        .collect()
}
