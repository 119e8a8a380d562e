#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! LLM-backed prose summaries of risk reports.
//!
//! The scoring pipeline's outputs are self-contained; this crate only turns
//! a finished [`RiskReport`] into a short narrative. The provider call is an
//! opaque external service: [`summarize`] wraps it so that any failure
//! degrades to a user-visible message instead of propagating — the rest of
//! the report must always render.

pub mod providers;

use crime_risk_scoring_models::RiskReport;
use thiserror::Error;

use crate::providers::LlmProvider;

/// Errors that can occur when calling the summary provider.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// System prompt for the summary call.
const SYSTEM_PROMPT: &str = "You are a crime data analyst. Summarize the risk \
assessment in two or three plain sentences for a non-technical reader. Do \
not invent numbers; use only the figures provided.";

/// Builds the user prompt for one report.
///
/// `profile_description` is a human-readable rendering of the selections
/// (e.g. "age 25, sex M, any descent, area Central, Evening").
#[must_use]
pub fn summary_prompt(profile_description: &str, report: &RiskReport) -> String {
    let mut prompt = format!(
        "Profile: {profile_description}\nRisk score: {} / 100\n",
        report.score
    );

    if report.top_crimes.is_empty() {
        prompt.push_str("No matching incidents were found.\n");
    } else {
        prompt.push_str("Top offense types among matching incidents:\n");
        for crime in &report.top_crimes {
            prompt.push_str(&format!("- {} ({} incidents)\n", crime.label, crime.count));
        }
    }

    prompt
}

/// Message shown when the provider call fails.
const DEGRADED_MESSAGE: &str =
    "A narrative summary is unavailable right now; the score and breakdowns above are unaffected.";

/// Generates a prose summary for the report. Never fails: a provider error
/// is logged and replaced with a degraded message.
pub async fn summarize(
    provider: &dyn LlmProvider,
    profile_description: &str,
    report: &RiskReport,
) -> String {
    let prompt = summary_prompt(profile_description, report);

    match provider.complete(SYSTEM_PROMPT, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Summary generation failed: {e}");
            DEGRADED_MESSAGE.to_string()
        }
    }
}
