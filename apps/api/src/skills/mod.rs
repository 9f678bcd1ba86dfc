// Skill proficiency timelines and the aggregations derived from them:
// current level, growth, top-N ranking and chart series.
// Everything here is pure; handlers only adapt JSON in and out.

pub mod aggregator;
pub mod handlers;
pub mod series;
pub mod timeline;
pub mod validation;

pub use aggregator::{summarize_skill, top_skills, SkillSummary, TOP_SKILLS_LIMIT};
