#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crime risk assessment backend.
//!
//! Loads the incident dataset once at startup and serves stateless
//! risk-assessment queries over it. Every request runs the pure
//! filter/score/aggregate pipeline against the shared read-only dataset.

pub mod handlers;

use std::sync::Arc;

use crime_risk_dataset::Dataset;

/// Shared application state.
pub struct AppState {
    /// The normalized dataset, loaded once at startup and never mutated.
    pub dataset: Arc<Dataset>,
}
