use serde::{Deserialize, Serialize};

use crate::models::{Project, Skill};
use crate::skills::aggregator::average_growth;
use crate::skills::{top_skills, SkillSummary, TOP_SKILLS_LIMIT};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_skills: usize,
    pub active_skills: usize,
    pub total_projects: usize,
    pub total_certificates: usize,
    /// Mean level change per active skill between its first and latest sample.
    pub average_growth: f64,
    pub top_skills: Vec<SkillSummary>,
}

pub fn summarize_dashboard(skills: &[Skill], projects: &[Project]) -> DashboardSummary {
    DashboardSummary {
        total_skills: skills.len(),
        active_skills: skills.iter().filter(|s| s.is_active()).count(),
        total_projects: projects.len(),
        total_certificates: skills.iter().map(|s| s.certificates.len()).sum(),
        average_growth: average_growth(skills),
        top_skills: top_skills(skills, TOP_SKILLS_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProficiencyEntry;
    use chrono::NaiveDate;

    #[test]
    fn test_counts() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let skills = vec![
            Skill {
                name: "React".to_string(),
                proficiency: vec![
                    ProficiencyEntry { date: d("2022-01-01"), level: 2 },
                    ProficiencyEntry { date: d("2023-06-01"), level: 5 },
                ],
                certificates: vec![],
            },
            Skill {
                name: "Docker".to_string(),
                proficiency: vec![],
                certificates: vec![],
            },
        ];
        let projects = vec![Project {
            title: "Shop".to_string(),
            tags: vec![],
            start_date: d("2022-01-01"),
            end_date: None,
            description: String::new(),
            link: None,
        }];

        let summary = summarize_dashboard(&skills, &projects);
        assert_eq!(summary.total_skills, 2);
        assert_eq!(summary.active_skills, 1);
        assert_eq!(summary.total_projects, 1);
        assert_eq!(summary.total_certificates, 0);
        assert!((summary.average_growth - 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.top_skills.len(), 1);
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = summarize_dashboard(&[], &[]);
        assert_eq!(summary.total_skills, 0);
        assert_eq!(summary.average_growth, 0.0);
        assert!(summary.top_skills.is_empty());
    }
}
