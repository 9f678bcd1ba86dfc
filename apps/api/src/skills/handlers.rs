//! Axum route handlers for skill analysis over a caller-supplied snapshot.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::RawSkill;
use crate::skills::series::{build_skill_chart, SkillChart};
use crate::skills::validation::{resolve_limit, sanitize_skills, SanitizeIssue};
use crate::skills::{summarize_skill, top_skills, SkillSummary, TOP_SKILLS_LIMIT};

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysisResponse {
    pub skills: Vec<SkillSummary>,
    pub top_skills: Vec<SkillSummary>,
    pub active_skills: usize,
    pub issues: Vec<SanitizeIssue>,
}

#[derive(Debug, Serialize)]
pub struct SkillChartResponse {
    #[serde(flatten)]
    pub chart: SkillChart,
    pub issues: Vec<SanitizeIssue>,
}

/// POST /api/v1/analysis/skills
pub async fn handle_analyze_skills(
    Json(req): Json<SkillsRequest>,
) -> Result<Json<SkillAnalysisResponse>, AppError> {
    let limit = resolve_limit(req.limit, TOP_SKILLS_LIMIT)?;
    let sanitized = sanitize_skills(req.skills);
    let skills = &sanitized.records;

    Ok(Json(SkillAnalysisResponse {
        skills: skills.iter().map(summarize_skill).collect(),
        top_skills: top_skills(skills, limit),
        active_skills: skills.iter().filter(|s| s.is_active()).count(),
        issues: sanitized.issues,
    }))
}

/// POST /api/v1/analysis/skills/chart
pub async fn handle_skill_chart(Json(req): Json<SkillsRequest>) -> Json<SkillChartResponse> {
    let sanitized = sanitize_skills(req.skills);
    Json(SkillChartResponse {
        chart: build_skill_chart(&sanitized.records),
        issues: sanitized.issues,
    })
}
