//! Gap Analyzer: compares current skill levels with a requirement set.
//!
//! Per requirement:
//! - current  = current level of the skill with the exact same name, else 0
//! - gap      = max(0, required - current)
//! - match %  = 100 if current >= required (this includes required = 0),
//!   otherwise round(current / required * 100)
//!
//! overall = round(mean of all match %), 100 for an empty requirement set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matching::band::MatchBand;
use crate::models::{Requirement, Skill};
use crate::skills::timeline::current_level;

/// How many deficiencies the dashboard highlights.
pub const DEFICIENCY_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GapEntry {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub gap: u8,
    pub match_percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    /// One entry per requirement, in requirement order.
    pub entries: Vec<GapEntry>,
    /// Entries with `gap > 0`, largest gap first, capped at the display limit.
    pub deficiencies: Vec<GapEntry>,
    pub overall_match: u8,
    pub band: MatchBand,
    pub recommendation: String,
}

pub fn match_percent(current: u8, required: u8) -> u8 {
    if current >= required {
        return 100;
    }
    // required > current >= 0, so required is non-zero here
    ((f64::from(current) / f64::from(required)) * 100.0).round() as u8
}

pub fn gap_entry(requirement: &Requirement, current: u8) -> GapEntry {
    GapEntry {
        skill: requirement.skill.clone(),
        current,
        required: requirement.required,
        gap: requirement.required.saturating_sub(current),
        match_percent: match_percent(current, requirement.required),
    }
}

pub fn analyze_gaps(skills: &[Skill], requirements: &[Requirement], limit: usize) -> GapReport {
    let mut levels: HashMap<&str, u8> = HashMap::with_capacity(skills.len());
    for skill in skills {
        levels
            .entry(skill.name.as_str())
            .or_insert_with(|| current_level(&skill.proficiency).unwrap_or(0));
    }

    let entries: Vec<GapEntry> = requirements
        .iter()
        .map(|req| gap_entry(req, levels.get(req.skill.as_str()).copied().unwrap_or(0)))
        .collect();

    let overall_match = overall_match(&entries);

    let mut deficiencies: Vec<GapEntry> = entries.iter().filter(|e| e.gap > 0).cloned().collect();
    deficiencies.sort_by(|a, b| b.gap.cmp(&a.gap));
    deficiencies.truncate(limit);

    let recommendation = build_recommendation(overall_match, &deficiencies);

    tracing::debug!(
        requirements = entries.len(),
        deficiencies = deficiencies.len(),
        overall_match,
        "Gap analysis complete"
    );

    GapReport {
        entries,
        deficiencies,
        overall_match,
        band: MatchBand::from_score(overall_match),
        recommendation,
    }
}

/// Rounded mean of the per-requirement match percentages.
pub fn overall_match(entries: &[GapEntry]) -> u8 {
    if entries.is_empty() {
        return 100;
    }
    let total: u32 = entries.iter().map(|e| u32::from(e.match_percent)).sum();
    (f64::from(total) / entries.len() as f64).round() as u8
}

fn build_recommendation(score: u8, deficiencies: &[GapEntry]) -> String {
    let top: Vec<&str> = deficiencies.iter().take(3).map(|d| d.skill.as_str()).collect();

    match MatchBand::from_score(score) {
        MatchBand::High if top.is_empty() => {
            "Strong match. You meet every listed requirement.".to_string()
        }
        MatchBand::High => format!(
            "Strong match ({score}%). Small gaps remain in: {}.",
            top.join(", ")
        ),
        MatchBand::Medium => format!(
            "Moderate match ({score}%). Focus on: {}.",
            top.join(", ")
        ),
        MatchBand::Low => format!(
            "Low match ({score}%). Significant gaps in: {}.",
            top.join(", ")
        ),
    }
}
