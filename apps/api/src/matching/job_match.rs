//! Job match scoring: the share of a listing's tags the user already holds.
//!
//! Tags are compared case-insensitively against the names of the user's
//! active skills. A listing without tags scores 0.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::band::MatchBand;
use crate::models::{JobListing, Skill};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub listing: JobListing,
    pub match_score: u8,
    pub matched_tags: Vec<String>,
    pub band: MatchBand,
}

/// Board filter, named as the client sends it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JobFilter {
    #[default]
    All,
    HighMatch,
    MediumMatch,
    LowMatch,
}

impl JobFilter {
    pub fn accepts(self, band: MatchBand) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::HighMatch => band == MatchBand::High,
            JobFilter::MediumMatch => band == MatchBand::Medium,
            JobFilter::LowMatch => band == MatchBand::Low,
        }
    }
}

/// Lower-cased names of the skills that count towards a match.
pub fn held_skill_names(skills: &[Skill]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| s.is_active())
        .map(|s| s.name.to_lowercase())
        .collect()
}

pub fn score_listing(listing: JobListing, held: &HashSet<String>) -> ScoredJob {
    let matched_tags: Vec<String> = listing
        .tags
        .iter()
        .filter(|t| held.contains(&t.to_lowercase()))
        .cloned()
        .collect();

    let match_score = if listing.tags.is_empty() {
        0
    } else {
        ((matched_tags.len() as f64 / listing.tags.len() as f64) * 100.0).round() as u8
    };

    ScoredJob {
        listing,
        match_score,
        matched_tags,
        band: MatchBand::from_score(match_score),
    }
}

/// Scores every listing, keeps those the filter accepts and orders them by
/// score, highest first (stable on ties).
pub fn match_jobs(skills: &[Skill], listings: Vec<JobListing>, filter: JobFilter) -> Vec<ScoredJob> {
    let held = held_skill_names(skills);

    let mut scored: Vec<ScoredJob> = listings
        .into_iter()
        .map(|l| score_listing(l, &held))
        .filter(|j| filter.accepts(j.band))
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}
