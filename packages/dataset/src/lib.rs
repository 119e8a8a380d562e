#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loader and normalizer for the crime incident dataset.
//!
//! Reads the LAPD "Crime Data from 2020 to Present" CSV export and produces
//! an immutable normalized [`Dataset`]. Rows missing a victim age or either
//! coordinate are dropped; every other malformed field degrades to a null
//! derived value. Only an unreadable or undecodable file fails the load.

pub mod cache;
pub mod parsing;

use std::io::Read;
use std::path::Path;

use crime_risk_dataset_models::{IncidentRecord, TimeOfDay};
use serde::Deserialize;
use thiserror::Error;

use crate::parsing::{month_period, parse_age, parse_coordinate, parse_occurred_date, parse_time_occ};

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV stream could not be decoded at all (e.g. missing headers).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw CSV row. Every field is optional so that missing or blank cells
/// degrade per-field instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Vict Age", default)]
    vict_age: Option<String>,
    #[serde(rename = "Vict Sex", default)]
    vict_sex: Option<String>,
    #[serde(rename = "Vict Descent", default)]
    vict_descent: Option<String>,
    #[serde(rename = "AREA NAME", default)]
    area_name: Option<String>,
    #[serde(rename = "LAT", default)]
    lat: Option<String>,
    #[serde(rename = "LON", default)]
    lon: Option<String>,
    #[serde(rename = "DATE OCC", default)]
    date_occ: Option<String>,
    #[serde(rename = "TIME OCC", default)]
    time_occ: Option<String>,
    #[serde(rename = "Crm Cd Desc", default)]
    crm_cd_desc: Option<String>,
}

/// The normalized dataset: an immutable, ordered collection of incident
/// records. Order is the raw file's row order and is preserved through
/// filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
}

impl Dataset {
    /// Wraps already-normalized records.
    #[must_use]
    pub const fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// All records, in load order.
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Enumerates the selectable values present in the dataset, for building
    /// the presentation layer's dropdowns.
    #[must_use]
    pub fn filter_choices(&self) -> FilterChoices {
        FilterChoices {
            sexes: self.distinct(|r| r.victim_sex.as_deref()),
            descents: self.distinct(|r| r.victim_descent.as_deref()),
            areas: self.distinct(|r| Some(r.area_name.as_str())),
            times_of_day: TimeOfDay::ALL.iter().map(ToString::to_string).collect(),
        }
    }

    fn distinct(&self, field: impl Fn(&IncidentRecord) -> Option<&str>) -> Vec<String> {
        let mut values: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| field(r).filter(|s| !s.is_empty()).map(ToString::to_string))
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

/// Distinct categorical values available for filtering, each sorted
/// ascending. The wildcard option is a presentation-layer concern and is not
/// included here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChoices {
    /// Distinct victim sex codes.
    pub sexes: Vec<String>,
    /// Distinct victim descent codes.
    pub descents: Vec<String>,
    /// Distinct patrol area names.
    pub areas: Vec<String>,
    /// Time-of-day bucket labels, in chronological order.
    pub times_of_day: Vec<String>,
}

/// Loads and normalizes the dataset from a CSV file.
///
/// # Errors
///
/// Returns [`DatasetError`] only if the file cannot be opened or the CSV
/// stream cannot be decoded. Individual malformed rows never fail the load.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let file = std::fs::File::open(path)?;
    load_dataset_from_reader(file)
}

/// Loads and normalizes the dataset from any CSV reader.
///
/// # Errors
///
/// Returns [`DatasetError`] if the CSV stream cannot be decoded.
pub fn load_dataset_from_reader(reader: impl Read) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut records = Vec::new();
    let mut raw_count: usize = 0;

    for row in csv_reader.deserialize::<RawRow>() {
        raw_count += 1;
        let Ok(raw) = row else {
            continue;
        };
        if let Some(record) = normalize_row(raw) {
            records.push(record);
        }
    }

    log::info!(
        "Loaded {} incidents from {raw_count} raw rows",
        records.len()
    );

    Ok(Dataset::new(records))
}

/// Normalizes one raw row, or returns `None` when a required field (age,
/// latitude, longitude) is missing or unparseable.
fn normalize_row(raw: RawRow) -> Option<IncidentRecord> {
    let victim_age = parse_age(raw.vict_age.as_ref())?;
    let latitude = parse_coordinate(raw.lat.as_ref())?;
    let longitude = parse_coordinate(raw.lon.as_ref())?;

    // Date parse failure nulls the derived fields, never drops the row.
    let occurred_date = raw.date_occ.as_deref().and_then(parse_occurred_date);

    let occurred_time_raw = parse_time_occ(raw.time_occ.as_ref());
    let hour_of_day = occurred_time_raw / 100;
    let time_of_day = TimeOfDay::from_hour(hour_of_day);

    Some(IncidentRecord {
        victim_age,
        victim_sex: raw.vict_sex.filter(|s| !s.is_empty()),
        victim_descent: raw.vict_descent.filter(|s| !s.is_empty()),
        area_name: raw.area_name.unwrap_or_default(),
        latitude,
        longitude,
        occurred_date,
        occurred_time_raw,
        hour_of_day,
        time_of_day,
        year: occurred_date.map(|d| chrono::Datelike::year(&d)),
        month_period: occurred_date.map(month_period),
        crime_description: raw.crm_cd_desc.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Vict Age,Vict Sex,Vict Descent,AREA NAME,LAT,LON,DATE OCC,TIME OCC,Crm Cd Desc";

    fn load(rows: &[&str]) -> Dataset {
        let csv = format!("{HEADER}\n{}", rows.join("\n"));
        load_dataset_from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn keeps_a_fully_populated_row() {
        let dataset = load(&[
            "34,M,H,Central,34.05,-118.24,03/01/2020 12:00:00 AM,2130,VEHICLE - STOLEN",
        ]);
        assert_eq!(dataset.len(), 1);

        let record = &dataset.records()[0];
        assert_eq!(record.victim_age, 34);
        assert_eq!(record.victim_sex.as_deref(), Some("M"));
        assert_eq!(record.area_name, "Central");
        assert_eq!(record.hour_of_day, 21);
        assert_eq!(record.time_of_day, TimeOfDay::Evening);
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.month_period.as_deref(), Some("2020-03"));
    }

    #[test]
    fn drops_row_with_missing_latitude() {
        let dataset = load(&[
            "34,M,H,Central,,-118.24,03/01/2020 12:00:00 AM,2130,VEHICLE - STOLEN",
            "28,F,W,Hollywood,34.10,-118.33,03/02/2020 12:00:00 AM,0915,BURGLARY",
        ]);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].area_name, "Hollywood");
    }

    #[test]
    fn drops_row_with_missing_age() {
        let dataset =
            load(&[",M,H,Central,34.05,-118.24,03/01/2020 12:00:00 AM,2130,VEHICLE - STOLEN"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn invalid_date_nulls_derived_fields_but_keeps_row() {
        let dataset = load(&["34,M,H,Central,34.05,-118.24,garbage,2130,VEHICLE - STOLEN"]);
        assert_eq!(dataset.len(), 1);

        let record = &dataset.records()[0];
        assert_eq!(record.occurred_date, None);
        assert_eq!(record.year, None);
        assert_eq!(record.month_period, None);
    }

    #[test]
    fn fractional_age_is_truncated() {
        let dataset = load(&["34.7,M,H,Central,34.05,-118.24,03/01/2020,2130,ROBBERY"]);
        assert_eq!(dataset.records()[0].victim_age, 34);
    }

    #[test]
    fn time_buckets_match_hour_table() {
        let dataset = load(&[
            "30,M,H,Central,34.05,-118.24,03/01/2020,0030,A",
            "30,M,H,Central,34.05,-118.24,03/01/2020,1130,B",
            "30,M,H,Central,34.05,-118.24,03/01/2020,1730,C",
            "30,M,H,Central,34.05,-118.24,03/01/2020,2330,D",
        ]);
        let buckets: Vec<TimeOfDay> = dataset.records().iter().map(|r| r.time_of_day).collect();
        assert_eq!(
            buckets,
            vec![
                TimeOfDay::LateNight,
                TimeOfDay::Morning,
                TimeOfDay::Afternoon,
                TimeOfDay::Evening,
            ]
        );
    }

    #[test]
    fn out_of_range_time_falls_into_evening() {
        let dataset = load(&["30,M,H,Central,34.05,-118.24,03/01/2020,9999,A"]);
        let record = &dataset.records()[0];
        assert_eq!(record.hour_of_day, 99);
        assert_eq!(record.time_of_day, TimeOfDay::Evening);
    }

    #[test]
    fn filter_choices_are_distinct_and_sorted() {
        let dataset = load(&[
            "30,M,H,Hollywood,34.05,-118.24,03/01/2020,1000,A",
            "25,F,W,Central,34.05,-118.24,03/01/2020,1000,B",
            "40,M,H,Central,34.05,-118.24,03/01/2020,1000,C",
            "22,,W,Central,34.05,-118.24,03/01/2020,1000,D",
        ]);
        let choices = dataset.filter_choices();
        assert_eq!(choices.sexes, vec!["F", "M"]);
        assert_eq!(choices.descents, vec!["H", "W"]);
        assert_eq!(choices.areas, vec!["Central", "Hollywood"]);
        assert_eq!(
            choices.times_of_day,
            vec!["Late Night", "Morning", "Afternoon", "Evening"]
        );
    }

    #[test]
    fn empty_file_loads_as_empty_dataset() {
        let dataset = load(&[]);
        assert!(dataset.is_empty());
        let choices = dataset.filter_choices();
        assert!(choices.sexes.is_empty());
        assert!(choices.areas.is_empty());
    }
}
