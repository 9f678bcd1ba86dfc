use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::dates;

/// One assessed (date, level) sample of a skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProficiencyEntry {
    #[serde(deserialize_with = "dates::flexible")]
    pub date: NaiveDate,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    #[serde(deserialize_with = "dates::flexible")]
    pub issue_date: NaiveDate,
    #[serde(default, deserialize_with = "dates::flexible_opt")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Certificate {
    /// A certificate without an expiry date never expires.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < on)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(rename = "skill", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub proficiency: Vec<ProficiencyEntry>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl Skill {
    /// A skill is active once it has at least one proficiency sample.
    pub fn is_active(&self) -> bool {
        !self.proficiency.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Unchecked records, as submitted by clients or stored by the document store.
// Dates and levels stay loosely typed until `sanitize_skills` reads them.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawProficiencyEntry {
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCertificate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: Option<Value>,
    #[serde(default)]
    pub expiry_date: Option<Value>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSkill {
    #[serde(rename = "skill", alias = "name", default)]
    pub name: String,
    #[serde(default)]
    pub proficiency: Vec<RawProficiencyEntry>,
    #[serde(default)]
    pub certificates: Vec<RawCertificate>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill: String,
    pub proficiency: Json<Vec<RawProficiencyEntry>>,
    pub certificates: Json<Vec<RawCertificate>>,
    pub created_at: DateTime<Utc>,
}

impl From<SkillRow> for RawSkill {
    fn from(row: SkillRow) -> Self {
        RawSkill {
            name: row.skill,
            proficiency: row.proficiency.0,
            certificates: row.certificates.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_document_shape() {
        let skill: Skill = serde_json::from_value(json!({
            "skill": "React",
            "proficiency": [
                { "date": "2023-06-01T00:00:00.000Z", "level": 5 },
                { "date": "2022-01-01", "level": 2 }
            ],
            "certificates": [{
                "name": "Meta Front-End",
                "issuer": "Coursera",
                "issueDate": "2023-02-10",
                "expiryDate": null,
                "credentialId": "ABC-123"
            }]
        }))
        .unwrap();

        assert_eq!(skill.name, "React");
        assert_eq!(skill.proficiency.len(), 2);
        assert_eq!(
            skill.proficiency[0].date,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
        assert_eq!(skill.certificates[0].expiry_date, None);
        assert_eq!(skill.certificates[0].credential_id.as_deref(), Some("ABC-123"));
        assert!(skill.is_active());
    }

    #[test]
    fn test_name_alias_and_missing_arrays() {
        let skill: Skill = serde_json::from_value(json!({ "name": "Go" })).unwrap();
        assert_eq!(skill.name, "Go");
        assert!(!skill.is_active());
        assert!(skill.certificates.is_empty());
    }

    #[test]
    fn test_empty_expiry_string_is_none() {
        let cert: Certificate = serde_json::from_value(json!({
            "name": "CKA",
            "issuer": "CNCF",
            "issueDate": "2021-03-01",
            "expiryDate": ""
        }))
        .unwrap();
        assert_eq!(cert.expiry_date, None);
    }

    #[test]
    fn test_raw_skill_accepts_malformed_fields() {
        let raw: RawSkill = serde_json::from_value(json!({
            "skill": "Docker",
            "proficiency": [
                { "date": "2023-01-01", "level": -1 },
                { "level": 3 },
                { "date": 20230101, "level": "high" }
            ],
            "certificates": [{ "name": "DCA", "issuer": "Docker", "issueDate": "" }]
        }))
        .unwrap();

        assert_eq!(raw.proficiency.len(), 3);
        assert_eq!(raw.proficiency[0].level, Some(json!(-1)));
        assert_eq!(raw.proficiency[1].date, None);
        assert_eq!(raw.certificates[0].issue_date, Some(json!("")));
        assert_eq!(raw.certificates[0].expiry_date, None);
    }

    #[test]
    fn test_certificate_expiry() {
        let cert = Certificate {
            name: "AWS SAA".to_string(),
            issuer: "Amazon".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            credential_id: None,
            credential_url: None,
            description: None,
        };
        assert!(cert.is_expired(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!cert.is_expired(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()));
    }
}
