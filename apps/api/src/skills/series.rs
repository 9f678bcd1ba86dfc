//! Data side of the skill progression chart: one sorted series per skill,
//! a stable colour per skill and the axis domains. Drawing is left to the
//! client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ProficiencyEntry, Skill};
use crate::skills::timeline::sorted_timeline;
use crate::skills::validation::MAX_LEVEL;

pub const SKILL_PALETTE: [&str; 12] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#8b5cf6", // purple
    "#f59e0b", // amber
    "#ef4444", // red
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#ec4899", // pink
    "#6366f1", // indigo
    "#14b8a6", // teal
    "#f43f5e", // rose
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillSeries {
    pub skill: String,
    pub color: String,
    pub points: Vec<ProficiencyEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DateDomain {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillChart {
    pub series: Vec<SkillSeries>,
    /// `None` when no skill has a sample.
    pub date_domain: Option<DateDomain>,
    pub level_domain: [u8; 2],
}

/// Colour for the skill at `index` in the user's skill list.
pub fn color_for(index: usize) -> &'static str {
    SKILL_PALETTE[index % SKILL_PALETTE.len()]
}

/// Builds the chart model. Colours follow the position in the full skill
/// list so a skill keeps its colour whether or not others have samples.
pub fn build_skill_chart(skills: &[Skill]) -> SkillChart {
    let series: Vec<SkillSeries> = skills
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active())
        .map(|(i, s)| SkillSeries {
            skill: s.name.clone(),
            color: color_for(i).to_string(),
            points: sorted_timeline(&s.proficiency),
        })
        .collect();

    let all_points = || series.iter().flat_map(|s| s.points.iter());

    let date_domain = match (
        all_points().map(|p| p.date).min(),
        all_points().map(|p| p.date).max(),
    ) {
        (Some(start), Some(end)) => Some(DateDomain { start, end }),
        _ => None,
    };

    let max_level = all_points().map(|p| p.level).max().unwrap_or(0);
    let upper = MAX_LEVEL.max(max_level.saturating_add(1));

    SkillChart {
        series,
        date_domain,
        level_domain: [0, upper],
    }
}
