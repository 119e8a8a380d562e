#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the risk assessment server.
//!
//! These types are serialized to JSON for the REST API. The wildcard is the
//! literal string `"All"` (or an absent parameter) on the wire and is mapped
//! to the core's tagged selection at the handler boundary.

use crime_risk_scoring_models::{Coordinate, CrimeCount, TrendPoint};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Selectable filter values, for building the presentation layer's controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptions {
    /// Distinct victim sex codes present in the dataset, sorted.
    pub sexes: Vec<String>,
    /// Distinct victim descent codes present in the dataset, sorted.
    pub descents: Vec<String>,
    /// Distinct patrol area names present in the dataset, sorted.
    pub areas: Vec<String>,
    /// Time-of-day bucket labels, in chronological order.
    pub times_of_day: Vec<String>,
    /// Lower bound of the age selector.
    pub age_min: i32,
    /// Upper bound of the age selector.
    pub age_max: i32,
    /// Default age selection.
    pub age_default: i32,
}

/// Query parameters for the assess endpoint. Each categorical parameter is
/// either a specific value or the wildcard `"All"`; absent means wildcard.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessParams {
    /// Age window center; clamped to the selectable range.
    pub age: Option<i32>,
    /// Victim sex selection.
    pub sex: Option<String>,
    /// Victim descent selection.
    pub descent: Option<String>,
    /// Patrol area selection.
    pub area: Option<String>,
    /// Time-of-day bucket selection.
    pub time_of_day: Option<String>,
    /// Whether to include an AI-generated prose summary.
    pub summary: Option<bool>,
}

/// Assessment response: the risk score, its three breakdowns, and the
/// optional prose summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAssessment {
    /// Relative risk score in [0, 100].
    pub score: u8,
    /// Top offense descriptions among the matches, at most five.
    pub top_crimes: Vec<CrimeCount>,
    /// Locations of the matched incidents.
    pub coordinates: Vec<Coordinate>,
    /// Monthly matched-incident counts, ascending by month label.
    pub monthly_trend: Vec<TrendPoint>,
    /// Prose summary, present only when requested. Carries a degraded
    /// message when the text-generation service fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
