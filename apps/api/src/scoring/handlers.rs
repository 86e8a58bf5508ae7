//! Axum route handlers for the ATS scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::pipeline::score_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_url: Option<String>,
    pub job_desc: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub ats_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /ats-score
///
/// Downloads the resume behind `resume_url`, extracts its text and scores it
/// against `job_desc`. Both fields are required; validation failures never
/// touch the network.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let resume_url = required_field(request.resume_url.as_deref(), "resume_url")?;
    let job_desc = required_field(request.job_desc.as_deref(), "job_desc")?;

    let ats_score = score_resume(state.fetcher.as_ref(), resume_url, job_desc).await?;

    Ok(Json(ScoreResponse { ats_score }))
}

fn required_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "missing required field: '{name}'"
        ))),
    }
}
