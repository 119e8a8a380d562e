#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Normalized incident record types and the time-of-day taxonomy.
//!
//! This crate defines the canonical shape of one historical crime incident
//! after loading/normalization. Every record is guaranteed to carry a victim
//! age and valid coordinates; date-derived fields degrade to `None` when the
//! raw date text is unparseable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Time-of-day bucket derived from the hour an incident occurred.
///
/// Buckets are half-open hour intervals, evaluated in order with
/// [`Self::Evening`] as the fallback arm. Out-of-range hours produced by
/// malformed raw time encodings deliberately fall into the fallback rather
/// than being rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimeOfDay {
    /// Hours [0, 6).
    #[serde(rename = "Late Night")]
    #[strum(serialize = "Late Night")]
    LateNight,
    /// Hours [6, 12).
    #[serde(rename = "Morning")]
    #[strum(serialize = "Morning")]
    Morning,
    /// Hours [12, 18).
    #[serde(rename = "Afternoon")]
    #[strum(serialize = "Afternoon")]
    Afternoon,
    /// Hours [18, 24), plus any hour outside [0, 24).
    #[serde(rename = "Evening")]
    #[strum(serialize = "Evening")]
    Evening,
}

impl TimeOfDay {
    /// All buckets, in chronological order starting at midnight.
    pub const ALL: &[Self] = &[
        Self::LateNight,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
    ];

    /// Maps an hour of day to its bucket. First matching interval wins;
    /// anything outside [0, 24) lands in [`Self::Evening`].
    #[must_use]
    pub const fn from_hour(hour: i32) -> Self {
        match hour {
            0..=5 => Self::LateNight,
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

/// One normalized historical crime incident.
///
/// Rows missing a victim age or either coordinate are dropped at load time,
/// so those fields are always present here. Date-derived fields (`year`,
/// `month_period`) are `None` when the raw occurrence date failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Victim age in years (truncated toward zero if the raw value was
    /// fractional).
    pub victim_age: i32,
    /// Victim sex code (e.g. "M", "F", "X"); absent in some raw rows.
    pub victim_sex: Option<String>,
    /// Victim descent code; absent in some raw rows.
    pub victim_descent: Option<String>,
    /// Patrol area name (e.g. "Central", "Hollywood").
    pub area_name: String,
    /// Latitude of the incident.
    pub latitude: f64,
    /// Longitude of the incident.
    pub longitude: f64,
    /// Calendar date the incident occurred; `None` if the raw text was
    /// unparseable.
    pub occurred_date: Option<NaiveDate>,
    /// Raw 24-hour HHMM time encoding (e.g. 1430 for 2:30 PM). Not bounds
    /// validated; malformed values propagate as-is.
    pub occurred_time_raw: i32,
    /// Hour component of [`Self::occurred_time_raw`] (integer division by
    /// 100). Can fall outside [0, 23] when the raw encoding is malformed.
    pub hour_of_day: i32,
    /// Time-of-day bucket for [`Self::hour_of_day`].
    pub time_of_day: TimeOfDay,
    /// Year the incident occurred, when the date parsed.
    pub year: Option<i32>,
    /// Month period label `YYYY-MM`, when the date parsed.
    pub month_period: Option<String>,
    /// Offense description (e.g. "VEHICLE - STOLEN").
    pub crime_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_the_day() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::LateNight);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn out_of_range_hours_fall_back_to_evening() {
        assert_eq!(TimeOfDay::from_hour(24), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(99), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(-1), TimeOfDay::Evening);
    }

    #[test]
    fn displays_human_readable_labels() {
        assert_eq!(TimeOfDay::LateNight.to_string(), "Late Night");
        assert_eq!(TimeOfDay::Morning.to_string(), "Morning");
    }

    #[test]
    fn parses_labels_back() {
        assert_eq!(
            "Late Night".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::LateNight
        );
        assert!("late night".parse::<TimeOfDay>().is_err());
    }
}
