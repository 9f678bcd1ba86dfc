//! Axum route handlers for the portfolio document and the dashboard.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Project, RawSkill, UserProfile};
use crate::portfolio::{assemble_portfolio, summarize_dashboard, DashboardSummary, PortfolioDocument};
use crate::skills::validation::{sanitize_skills, SanitizeIssue};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    #[serde(flatten)]
    pub document: PortfolioDocument,
    pub issues: Vec<SanitizeIssue>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub issues: Vec<SanitizeIssue>,
}

/// POST /api/v1/analysis/portfolio
pub async fn handle_assemble_portfolio(Json(req): Json<PortfolioRequest>) -> Json<PortfolioResponse> {
    let skills = sanitize_skills(req.skills);
    Json(PortfolioResponse {
        document: assemble_portfolio(&req.profile, &skills.records, &req.projects, Utc::now()),
        issues: skills.issues,
    })
}

/// GET /api/v1/users/:user_id/portfolio
pub async fn handle_user_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let (profile, skills, projects) = tokio::try_join!(
        state.store.fetch_profile(user_id),
        state.store.fetch_skills(user_id),
        state.store.fetch_projects(user_id),
    )?;

    let skills = sanitize_skills(skills);
    let doc = assemble_portfolio(&profile.unwrap_or_default(), &skills.records, &projects, Utc::now());

    info!(
        "Assembled portfolio for user {user_id}: {} skills, {} projects, {} certificates",
        doc.skill_count,
        doc.projects.len(),
        doc.certificates.len()
    );
    Ok(Json(PortfolioResponse {
        document: doc,
        issues: skills.issues,
    }))
}

/// GET /api/v1/users/:user_id/dashboard
pub async fn handle_user_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let (skills, projects) = tokio::try_join!(
        state.store.fetch_skills(user_id),
        state.store.fetch_projects(user_id),
    )?;

    let skills = sanitize_skills(skills);
    Ok(Json(DashboardResponse {
        summary: summarize_dashboard(&skills.records, &projects),
        issues: skills.issues,
    }))
}
