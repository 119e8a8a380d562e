#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Risk filter engine and aggregation reporters.
//!
//! [`score`] applies a [`FilterProfile`] to the shared dataset in one pass
//! and derives the saturating risk score from the matched fraction. The
//! [`reports`] module provides the three read-only breakdowns over the
//! matched records, and [`assess`] bundles everything into the
//! per-interaction [`RiskReport`].

pub mod reports;

use crime_risk_dataset::Dataset;
use crime_risk_dataset_models::IncidentRecord;
use crime_risk_scoring_models::{AGE_WINDOW, FilterProfile, RiskReport, RiskResult};

/// Scale factor applied to the matched fraction. Deliberately 1000 rather
/// than 100: the score saturates at [`SCORE_MAX`] instead of behaving as a
/// true percentage. This scaling is the contract and must not be "fixed".
const SCORE_SCALE: u64 = 1000;

/// Upper bound the scaled score is clamped to.
const SCORE_MAX: u64 = 100;

/// Applies the profile to the dataset and computes the risk score.
///
/// All predicates are conjunctive: the four categorical selections (exact,
/// case-sensitive when pinned) plus the closed victim age window
/// `[age_center - 5, age_center + 5]`. Matched records keep dataset order.
///
/// The score is `floor(matched / total * 1000)` clamped to 100, and defined
/// as 0 for an empty dataset. A categorical value not present in the dataset
/// simply matches nothing.
#[must_use]
pub fn score<'a>(dataset: &'a Dataset, profile: &FilterProfile) -> RiskResult<'a> {
    let matched: Vec<&'a IncidentRecord> = dataset
        .records()
        .iter()
        .filter(|record| matches_profile(record, profile))
        .collect();

    let score = saturating_score(matched.len(), dataset.len());

    log::debug!(
        "Profile matched {} of {} records (score {score})",
        matched.len(),
        dataset.len()
    );

    RiskResult { score, matched }
}

/// Runs the full pipeline for one interaction: score plus the three
/// aggregate breakdowns.
#[must_use]
pub fn assess(dataset: &Dataset, profile: &FilterProfile) -> RiskReport {
    let result = score(dataset, profile);

    RiskReport {
        score: result.score,
        top_crimes: reports::top_crimes(&result.matched),
        coordinates: reports::coordinates(&result.matched),
        monthly_trend: reports::monthly_trend(&result.matched),
    }
}

fn matches_profile(record: &IncidentRecord, profile: &FilterProfile) -> bool {
    profile.sex.matches(record.victim_sex.as_ref())
        && profile.descent.matches(record.victim_descent.as_ref())
        && profile.area.matches(Some(&record.area_name))
        && profile.time_of_day.matches(Some(&record.time_of_day))
        && record.victim_age >= profile.age_center - AGE_WINDOW
        && record.victim_age <= profile.age_center + AGE_WINDOW
}

#[allow(clippy::cast_possible_truncation)]
fn saturating_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer division floors the scaled fraction.
    let scaled = matched as u64 * SCORE_SCALE / total as u64;
    scaled.min(SCORE_MAX) as u8
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crime_risk_dataset_models::TimeOfDay;
    use crime_risk_scoring_models::Selection;

    use super::*;

    fn record(
        age: i32,
        sex: &str,
        descent: &str,
        area: &str,
        time_of_day: TimeOfDay,
        description: &str,
    ) -> IncidentRecord {
        let date = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        IncidentRecord {
            victim_age: age,
            victim_sex: Some(sex.to_string()),
            victim_descent: Some(descent.to_string()),
            area_name: area.to_string(),
            latitude: 34.05,
            longitude: -118.24,
            occurred_date: Some(date),
            occurred_time_raw: 1200,
            hour_of_day: 12,
            time_of_day,
            year: Some(2023),
            month_period: Some("2023-07".to_string()),
            crime_description: description.to_string(),
        }
    }

    fn dataset_of(count: usize, matching: usize) -> Dataset {
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            if i < matching {
                records.push(record(25, "M", "H", "Central", TimeOfDay::Afternoon, "A"));
            } else {
                records.push(record(70, "F", "W", "Hollywood", TimeOfDay::Morning, "B"));
            }
        }
        Dataset::new(records)
    }

    fn central_profile() -> FilterProfile {
        FilterProfile {
            age_center: 25,
            sex: Selection::Only("M".to_string()),
            descent: Selection::Only("H".to_string()),
            area: Selection::Only("Central".to_string()),
            time_of_day: Selection::Only(TimeOfDay::Afternoon),
        }
    }

    #[test]
    fn score_is_floor_of_scaled_fraction() {
        let dataset = dataset_of(1000, 37);
        let result = score(&dataset, &central_profile());
        assert_eq!(result.score, 37);
        assert_eq!(result.matched.len(), 37);
    }

    #[test]
    fn score_saturates_at_one_hundred() {
        let dataset = dataset_of(1000, 150);
        let result = score(&dataset, &central_profile());
        assert_eq!(result.score, 100);
        assert_eq!(result.matched.len(), 150);
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let dataset = Dataset::new(Vec::new());
        let result = score(&dataset, &FilterProfile::any_at_age(25));
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn full_wildcard_covering_age_range_matches_everything() {
        let records = vec![
            record(21, "M", "H", "Central", TimeOfDay::Morning, "A"),
            record(25, "F", "W", "Hollywood", TimeOfDay::Evening, "B"),
            record(29, "X", "B", "Rampart", TimeOfDay::LateNight, "C"),
        ];
        let dataset = Dataset::new(records);
        let result = score(&dataset, &FilterProfile::any_at_age(25));
        assert_eq!(result.matched.len(), dataset.len());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn age_window_bounds_are_inclusive() {
        let records = vec![
            record(19, "M", "H", "Central", TimeOfDay::Morning, "A"),
            record(20, "M", "H", "Central", TimeOfDay::Morning, "B"),
            record(30, "M", "H", "Central", TimeOfDay::Morning, "C"),
            record(31, "M", "H", "Central", TimeOfDay::Morning, "D"),
        ];
        let dataset = Dataset::new(records);
        let result = score(&dataset, &FilterProfile::any_at_age(25));
        let descriptions: Vec<&str> = result
            .matched
            .iter()
            .map(|r| r.crime_description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["B", "C"]);
    }

    #[test]
    fn relaxing_a_predicate_never_shrinks_the_match_set() {
        let mut records = Vec::new();
        for (i, area) in ["Central", "Hollywood", "Rampart"].iter().enumerate() {
            for _ in 0..=i {
                records.push(record(25, "M", "H", area, TimeOfDay::Afternoon, "A"));
            }
        }
        let dataset = Dataset::new(records);

        let pinned = central_profile();
        let mut relaxed = central_profile();
        relaxed.area = Selection::Any;

        let pinned_matches = score(&dataset, &pinned).matched.len();
        let relaxed_matches = score(&dataset, &relaxed).matched.len();
        assert!(relaxed_matches >= pinned_matches);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let dataset = dataset_of(10, 10);
        let mut profile = FilterProfile::any_at_age(25);
        profile.area = Selection::Only("Atlantis".to_string());
        let result = score(&dataset, &profile);
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn record_missing_sex_does_not_match_pinned_sex() {
        let mut no_sex = record(25, "M", "H", "Central", TimeOfDay::Afternoon, "A");
        no_sex.victim_sex = None;
        let dataset = Dataset::new(vec![no_sex]);

        let mut profile = FilterProfile::any_at_age(25);
        profile.sex = Selection::Only("M".to_string());
        assert!(score(&dataset, &profile).matched.is_empty());

        // Wildcard still matches the absent value.
        assert_eq!(
            score(&dataset, &FilterProfile::any_at_age(25)).matched.len(),
            1
        );
    }

    #[test]
    fn assess_bundles_all_breakdowns() {
        let dataset = dataset_of(1000, 37);
        let report = assess(&dataset, &central_profile());
        assert_eq!(report.score, 37);
        assert_eq!(report.top_crimes.len(), 1);
        assert_eq!(report.coordinates.len(), 37);
        assert_eq!(report.monthly_trend.len(), 1);
    }

    #[test]
    fn empty_match_set_yields_well_formed_empty_report() {
        let dataset = dataset_of(10, 0);
        let report = assess(&dataset, &central_profile());
        assert_eq!(report.score, 0);
        assert!(report.top_crimes.is_empty());
        assert!(report.coordinates.is_empty());
        assert!(report.monthly_trend.is_empty());
    }
}
