use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::dates;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default, deserialize_with = "unique_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "dates::flexible")]
    pub start_date: NaiveDate,
    /// `None` for a project that is still running.
    #[serde(default, deserialize_with = "dates::flexible_opt")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Tags form a set: blanks are dropped and repeats keep their first position.
pub fn dedup_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

fn unique_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(dedup_tags(raw.unwrap_or_default()))
}

#[allow(dead_code)]
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub tags: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            title: row.title,
            tags: dedup_tags(row.tags),
            start_date: row.start_date,
            end_date: row.end_date,
            description: row.description.unwrap_or_default(),
            link: row.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags_are_a_set() {
        let project: Project = serde_json::from_value(json!({
            "title": "E-commerce Platform",
            "tags": ["React", "Node.js", "React", " ", "MongoDB"],
            "startDate": "2022-01-01",
            "endDate": "2022-06-01",
            "description": "Full-stack shop"
        }))
        .unwrap();
        assert_eq!(project.tags, vec!["React", "Node.js", "MongoDB"]);
        assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2022, 6, 1));
        assert!(project.link.is_none());
    }

    #[test]
    fn test_ongoing_project_without_end_date() {
        let project: Project = serde_json::from_value(json!({
            "title": "Portfolio Website",
            "startDate": "2023-02-01T00:00:00.000Z"
        }))
        .unwrap();
        assert!(project.end_date.is_none());
        assert!(project.tags.is_empty());
        assert_eq!(project.description, "");
    }
}
