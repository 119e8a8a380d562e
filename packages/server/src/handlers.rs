//! HTTP handler functions for the risk assessment API.

use actix_web::{HttpResponse, web};
use crime_risk_dataset_models::TimeOfDay;
use crime_risk_scoring_models::{
    AGE_DEFAULT, AGE_MAX, AGE_MIN, FilterProfile, RiskReport, Selection,
};
use crime_risk_server_models::{ApiAssessment, ApiHealth, ApiOptions, AssessParams};

use crate::AppState;

/// Wire-level wildcard marker. Only exists at this boundary; the core uses
/// the tagged [`Selection`] type.
const WILDCARD: &str = "All";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/options`
///
/// Returns the selectable filter values enumerated from the loaded dataset,
/// plus the age selector bounds. The wildcard option is added client-side.
pub async fn options(state: web::Data<AppState>) -> HttpResponse {
    let choices = state.dataset.filter_choices();

    HttpResponse::Ok().json(ApiOptions {
        sexes: choices.sexes,
        descents: choices.descents,
        areas: choices.areas,
        times_of_day: choices.times_of_day,
        age_min: AGE_MIN,
        age_max: AGE_MAX,
        age_default: AGE_DEFAULT,
    })
}

/// `GET /api/assess`
///
/// Runs the filter/score/aggregate pipeline for one profile. With
/// `summary=true` the response also carries an AI-generated prose summary;
/// a text-generation failure degrades to a message and never blocks the
/// rest of the report.
pub async fn assess(state: web::Data<AppState>, params: web::Query<AssessParams>) -> HttpResponse {
    let age = params.age.unwrap_or(AGE_DEFAULT).clamp(AGE_MIN, AGE_MAX);

    // A time-of-day value that is neither the wildcard nor a known bucket
    // label can match no record at all.
    let report = match time_selection(params.time_of_day.as_deref()) {
        Some(time_of_day) => {
            let profile = FilterProfile {
                age_center: age,
                sex: selection(params.sex.as_deref()),
                descent: selection(params.descent.as_deref()),
                area: selection(params.area.as_deref()),
                time_of_day,
            };
            crime_risk_scoring::assess(&state.dataset, &profile)
        }
        None => RiskReport {
            score: 0,
            top_crimes: Vec::new(),
            coordinates: Vec::new(),
            monthly_trend: Vec::new(),
        },
    };

    let summary = if params.summary == Some(true) {
        Some(generate_summary(&params, age, &report).await)
    } else {
        None
    };

    HttpResponse::Ok().json(ApiAssessment {
        score: report.score,
        top_crimes: report.top_crimes,
        coordinates: report.coordinates,
        monthly_trend: report.monthly_trend,
        summary,
    })
}

/// Maps a categorical query parameter to a selection. Absent or `"All"`
/// means wildcard.
fn selection(param: Option<&str>) -> Selection<String> {
    match param {
        None | Some(WILDCARD) => Selection::Any,
        Some(value) => Selection::Only(value.to_string()),
    }
}

/// Maps the time-of-day parameter. Returns `None` for an unrecognized
/// bucket label, which the caller treats as matching zero records.
fn time_selection(param: Option<&str>) -> Option<Selection<TimeOfDay>> {
    match param {
        None | Some(WILDCARD) => Some(Selection::Any),
        Some(value) => value.parse::<TimeOfDay>().ok().map(Selection::Only),
    }
}

/// Human-readable rendering of the selections, for the summary prompt.
fn profile_description(params: &AssessParams, age: i32) -> String {
    let field = |value: Option<&str>, any_label: &str| match value {
        None | Some(WILDCARD) => any_label.to_string(),
        Some(v) => v.to_string(),
    };

    format!(
        "age {age}, sex {}, descent {}, area {}, {}",
        field(params.sex.as_deref(), "any"),
        field(params.descent.as_deref(), "any"),
        field(params.area.as_deref(), "any"),
        field(params.time_of_day.as_deref(), "any time of day"),
    )
}

async fn generate_summary(params: &AssessParams, age: i32, report: &RiskReport) -> String {
    let description = profile_description(params, age);

    match crime_risk_ai::providers::create_provider_from_env() {
        Ok(provider) => crime_risk_ai::summarize(provider.as_ref(), &description, report).await,
        Err(e) => {
            log::warn!("No summary provider available: {e}");
            format!("A narrative summary is unavailable ({e}); the score and breakdowns are unaffected.")
        }
    }
}
