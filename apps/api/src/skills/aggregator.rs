//! Skill Aggregator: per-skill summaries and the top-N ranking used by the
//! resume summary and the dashboard.

use serde::{Deserialize, Serialize};

use crate::models::Skill;
use crate::skills::timeline::{current_level, growth};

/// Number of skills shown in a portfolio's "Skills Summary" block.
pub const TOP_SKILLS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub skill: String,
    /// `None` (serialized as `null`) when the skill has no samples yet.
    pub current_level: Option<u8>,
    pub growth: i16,
    pub points: usize,
    pub certificate_count: usize,
}

pub fn summarize_skill(skill: &Skill) -> SkillSummary {
    SkillSummary {
        skill: skill.name.clone(),
        current_level: current_level(&skill.proficiency),
        growth: growth(&skill.proficiency),
        points: skill.proficiency.len(),
        certificate_count: skill.certificates.len(),
    }
}

/// Ranks active skills by current level, highest first, keeping at most `limit`.
///
/// The sort is stable: skills with equal levels keep their input order.
/// Skills without any proficiency sample are not ranked.
pub fn top_skills(skills: &[Skill], limit: usize) -> Vec<SkillSummary> {
    let mut ranked: Vec<SkillSummary> = skills
        .iter()
        .filter(|s| s.is_active())
        .map(summarize_skill)
        .collect();

    ranked.sort_by(|a, b| b.current_level.cmp(&a.current_level));
    ranked.truncate(limit);
    ranked
}

/// Mean growth across active skills, rounded to one decimal. Zero when no
/// skill is active.
pub fn average_growth(skills: &[Skill]) -> f64 {
    let growths: Vec<i16> = skills
        .iter()
        .filter(|s| s.is_active())
        .map(|s| growth(&s.proficiency))
        .collect();

    if growths.is_empty() {
        return 0.0;
    }
    let total: i32 = growths.iter().map(|&g| i32::from(g)).sum();
    (f64::from(total) / growths.len() as f64 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProficiencyEntry;
    use chrono::NaiveDate;

    fn skill(name: &str, samples: &[(&str, u8)]) -> Skill {
        Skill {
            name: name.to_string(),
            proficiency: samples
                .iter()
                .map(|(d, l)| ProficiencyEntry {
                    date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
                    level: *l,
                })
                .collect(),
            certificates: vec![],
        }
    }

    #[test]
    fn test_summary_of_unsorted_skill() {
        let react = skill(
            "React",
            &[("2023-01-01", 4), ("2022-01-01", 2), ("2023-06-01", 5)],
        );
        let summary = summarize_skill(&react);
        assert_eq!(summary.current_level, Some(5));
        assert_eq!(summary.growth, 3);
        assert_eq!(summary.points, 3);
        assert_eq!(summary.certificate_count, 0);
    }

    #[test]
    fn test_summary_of_empty_skill() {
        let summary = summarize_skill(&skill("Rust", &[]));
        assert_eq!(summary.current_level, None);
        assert_eq!(summary.growth, 0);
    }

    #[test]
    fn test_top_skills_descending() {
        let skills = vec![
            skill("Python", &[("2023-01-01", 2)]),
            skill("React", &[("2023-01-01", 5)]),
            skill("Node.js", &[("2023-01-01", 4)]),
        ];
        let names: Vec<String> = top_skills(&skills, 5).into_iter().map(|s| s.skill).collect();
        assert_eq!(names, vec!["React", "Node.js", "Python"]);
    }

    #[test]
    fn test_top_skills_stable_on_ties() {
        let skills = vec![
            skill("Go", &[("2023-01-01", 3)]),
            skill("Rust", &[("2023-01-01", 4)]),
            skill("Java", &[("2023-01-01", 3)]),
            skill("C", &[("2023-01-01", 3)]),
        ];
        let names: Vec<String> = top_skills(&skills, 5).into_iter().map(|s| s.skill).collect();
        assert_eq!(names, vec!["Rust", "Go", "Java", "C"]);
    }

    #[test]
    fn test_top_skills_truncates_and_skips_inactive() {
        let skills = vec![
            skill("A", &[("2023-01-01", 1)]),
            skill("B", &[]),
            skill("C", &[("2023-01-01", 2)]),
            skill("D", &[("2023-01-01", 3)]),
        ];
        let top = top_skills(&skills, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].skill, "D");
        assert_eq!(top[1].skill, "C");
        assert!(top_skills(&skills, 10).iter().all(|s| s.skill != "B"));
    }

    #[test]
    fn test_average_growth() {
        let skills = vec![
            skill("A", &[("2022-01-01", 1), ("2023-01-01", 4)]),
            skill("B", &[("2022-01-01", 2), ("2023-01-01", 2)]),
            skill("C", &[("2022-01-01", 3), ("2023-01-01", 2)]),
            skill("D", &[]),
        ];
        // (3 + 0 - 1) / 3 = 0.666… → 0.7
        assert!((average_growth(&skills) - 0.7).abs() < f64::EPSILON);
        assert_eq!(average_growth(&[]), 0.0);
    }
}
