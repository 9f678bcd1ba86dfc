//! Axum route handlers for gap analysis and job matching.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::{
    analyze_gaps, match_jobs, GapReport, JobFilter, JobQuery, ScoredJob, DEFICIENCY_DISPLAY_LIMIT,
};
use crate::models::{JobListing, RawSkill, Requirement};
use crate::skills::validation::{resolve_limit, sanitize_requirements, sanitize_skills, SanitizeIssue};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GapRequest {
    pub skills: Vec<RawSkill>,
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UserGapRequest {
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GapResponse {
    #[serde(flatten)]
    pub report: GapReport,
    pub issues: Vec<SanitizeIssue>,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub skills: Vec<RawSkill>,
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub filter: JobFilter,
}

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    #[serde(flatten)]
    pub query: JobQuery,
    #[serde(default)]
    pub filter: JobFilter,
}

#[derive(Debug, Serialize)]
pub struct JobMatchResponse {
    pub total: usize,
    pub jobs: Vec<ScoredJob>,
    pub issues: Vec<SanitizeIssue>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/gap
pub async fn handle_analyze_gap(Json(req): Json<GapRequest>) -> Result<Json<GapResponse>, AppError> {
    let limit = resolve_limit(req.limit, DEFICIENCY_DISPLAY_LIMIT)?;
    Ok(Json(build_gap_response(req.skills, req.requirements, limit)))
}

/// POST /api/v1/users/:user_id/gap
pub async fn handle_user_gap(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UserGapRequest>,
) -> Result<Json<GapResponse>, AppError> {
    let limit = resolve_limit(req.limit, DEFICIENCY_DISPLAY_LIMIT)?;
    let skills = state.store.fetch_skills(user_id).await?;
    let response = build_gap_response(skills, req.requirements, limit);

    info!(
        "Gap analysis for user {user_id}: overall match {}%",
        response.report.overall_match
    );
    Ok(Json(response))
}

/// POST /api/v1/analysis/jobs
pub async fn handle_match_jobs(Json(req): Json<JobMatchRequest>) -> Json<JobMatchResponse> {
    let skills = sanitize_skills(req.skills);
    let jobs = match_jobs(&skills.records, req.jobs, req.filter);
    Json(JobMatchResponse {
        total: jobs.len(),
        jobs,
        issues: skills.issues,
    })
}

/// POST /api/v1/users/:user_id/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<JobSearchRequest>,
) -> Result<Json<JobMatchResponse>, AppError> {
    if req.query.keywords.trim().is_empty() {
        return Err(AppError::Validation("keywords must not be empty".to_string()));
    }

    let (skills, listings) = tokio::try_join!(
        state.store.fetch_skills(user_id),
        state.jobs.search(&req.query),
    )?;

    let skills = sanitize_skills(skills);
    let jobs = match_jobs(&skills.records, listings, req.filter);
    Ok(Json(JobMatchResponse {
        total: jobs.len(),
        jobs,
        issues: skills.issues,
    }))
}

fn build_gap_response(skills: Vec<RawSkill>, requirements: Vec<Requirement>, limit: usize) -> GapResponse {
    let skills = sanitize_skills(skills);
    let requirements = sanitize_requirements(requirements);

    let report = analyze_gaps(&skills.records, &requirements.records, limit);

    let mut issues = skills.issues;
    issues.extend(requirements.issues);
    GapResponse { report, issues }
}
