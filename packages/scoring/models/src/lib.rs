#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Filter profile and risk report types.
//!
//! A [`FilterProfile`] describes one risk query: an age window center plus
//! four categorical dimensions that are each either pinned to a specific
//! value or wildcarded. The engine's outputs are bundled in [`RiskReport`],
//! which is exactly the per-interaction contract the presentation layer
//! consumes.

use crime_risk_dataset_models::{IncidentRecord, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Lower bound of the selectable age range.
pub const AGE_MIN: i32 = 10;
/// Upper bound of the selectable age range.
pub const AGE_MAX: i32 = 90;
/// Default age selection.
pub const AGE_DEFAULT: i32 = 25;
/// Half-width of the age window applied around the selected age.
pub const AGE_WINDOW: i32 = 5;

/// A filter dimension: either wildcarded ("match anything") or pinned to
/// one specific value.
///
/// Modeled as a tagged value rather than a sentinel string so that a real
/// category literally named "All" can never collide with the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection<T> {
    /// Match any value, including absent ones.
    Any,
    /// Match records whose field equals this value exactly.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether a record's field value satisfies this selection. `Any`
    /// matches everything; `Only` requires a present, exactly-equal value.
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => value == Some(expected),
        }
    }
}

/// One risk query: demographic, location, and time-of-day constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterProfile {
    /// Center of the `[age - 5, age + 5]` victim age window.
    pub age_center: i32,
    /// Victim sex constraint.
    pub sex: Selection<String>,
    /// Victim descent constraint.
    pub descent: Selection<String>,
    /// Patrol area constraint.
    pub area: Selection<String>,
    /// Time-of-day bucket constraint.
    pub time_of_day: Selection<TimeOfDay>,
}

impl FilterProfile {
    /// A fully wildcarded profile centered on the given age.
    #[must_use]
    pub const fn any_at_age(age_center: i32) -> Self {
        Self {
            age_center,
            sex: Selection::Any,
            descent: Selection::Any,
            area: Selection::Any,
            time_of_day: Selection::Any,
        }
    }
}

/// Result of scoring one profile: the bounded score and the matched records
/// in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskResult<'a> {
    /// Relative risk score in [0, 100].
    pub score: u8,
    /// Records matching the profile, in the order they appear in the
    /// dataset.
    pub matched: Vec<&'a IncidentRecord>,
}

/// Count of matched incidents for one offense description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeCount {
    /// Offense description label.
    pub label: String,
    /// Number of matched incidents with this label.
    pub count: u64,
}

/// An incident location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

/// Matched incident count for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Month label, `YYYY-MM`.
    pub month: String,
    /// Matched incidents in that month.
    pub count: u64,
}

/// The full per-interaction output: score plus the three breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    /// Relative risk score in [0, 100].
    pub score: u8,
    /// Top offense descriptions among the matches, at most five.
    pub top_crimes: Vec<CrimeCount>,
    /// Locations of the matched incidents.
    pub coordinates: Vec<Coordinate>,
    /// Monthly matched-incident counts, ascending by month label.
    pub monthly_trend: Vec<TrendPoint>,
}
