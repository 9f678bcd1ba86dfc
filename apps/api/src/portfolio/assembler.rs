//! Portfolio Assembler: composes skills, certificates and projects into the
//! export-ready document behind the resume preview and the public portfolio.
//!
//! Pure: the generation timestamp is supplied by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Certificate, Project, Skill, UserProfile};
use crate::skills::{top_skills, SkillSummary, TOP_SKILLS_LIMIT};

const PLACEHOLDER_NAME: &str = "Your Name";
const PLACEHOLDER_TITLE: &str = "Software Developer";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStatus {
    Complete,
    /// No skills and no projects: render the placeholder state.
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioHeader {
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub skill: String,
    #[serde(flatten)]
    pub certificate: Certificate,
    pub expired: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub header: PortfolioHeader,
    pub status: PortfolioStatus,
    pub skill_count: usize,
    pub top_skills: Vec<SkillSummary>,
    /// Newest first.
    pub certificates: Vec<CertificateRecord>,
    /// Oldest first, for the timeline view.
    pub projects: Vec<Project>,
    pub generated_at: DateTime<Utc>,
}

pub fn assemble_portfolio(
    profile: &UserProfile,
    skills: &[Skill],
    projects: &[Project],
    generated_at: DateTime<Utc>,
) -> PortfolioDocument {
    let status = if skills.is_empty() && projects.is_empty() {
        PortfolioStatus::Empty
    } else {
        PortfolioStatus::Complete
    };

    let mut timeline = projects.to_vec();
    timeline.sort_by_key(|p| p.start_date);

    PortfolioDocument {
        header: build_header(profile),
        status,
        skill_count: skills.len(),
        top_skills: top_skills(skills, TOP_SKILLS_LIMIT),
        certificates: flatten_certificates(skills, generated_at),
        projects: timeline,
        generated_at,
    }
}

/// All certificates across skills, newest issue date first. Certificates
/// issued the same day keep skill order, then ledger order.
pub fn flatten_certificates(skills: &[Skill], as_of: DateTime<Utc>) -> Vec<CertificateRecord> {
    let today = as_of.date_naive();
    let mut records: Vec<CertificateRecord> = skills
        .iter()
        .flat_map(|skill| {
            skill.certificates.iter().map(move |cert| CertificateRecord {
                skill: skill.name.clone(),
                certificate: cert.clone(),
                expired: cert.is_expired(today),
            })
        })
        .collect();

    records.sort_by(|a, b| b.certificate.issue_date.cmp(&a.certificate.issue_date));
    records
}

fn build_header(profile: &UserProfile) -> PortfolioHeader {
    let or_placeholder = |value: &Option<String>, placeholder: &str| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(placeholder)
            .to_string()
    };

    PortfolioHeader {
        name: or_placeholder(&profile.name, PLACEHOLDER_NAME),
        title: or_placeholder(&profile.title, PLACEHOLDER_TITLE),
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        location: profile.location.clone(),
    }
}
