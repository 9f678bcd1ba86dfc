// Requirement matching: per-skill gap analysis against a target profile and
// tag-overlap scoring of job listings.

pub mod band;
pub mod gap;
pub mod handlers;
pub mod job_match;
pub mod job_source;

pub use gap::{analyze_gaps, GapReport, DEFICIENCY_DISPLAY_LIMIT};
pub use job_match::{match_jobs, JobFilter, ScoredJob};
pub use job_source::{DisabledJobSource, JobQuery, JobSource, JoobleJobSource};
