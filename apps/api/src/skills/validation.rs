//! Boundary sanitizer for skill snapshots.
//!
//! The aggregations assume well-formed records (levels in 1..=5, non-blank
//! names). Anything else is stripped here and reported, never passed on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{
    dates, Certificate, ProficiencyEntry, RawCertificate, RawProficiencyEntry, RawSkill, Requirement,
    Skill,
};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;
/// Upper bound for caller-supplied display limits (top-N, deficiency lists).
pub const MAX_DISPLAY_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SanitizeIssue {
    pub skill: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Sanitized<T> {
    pub records: Vec<T>,
    pub issues: Vec<SanitizeIssue>,
}

impl<T> Default for Sanitized<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            issues: Vec::new(),
        }
    }
}

pub fn is_valid_level(level: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Reads a batch of unchecked skills into the core model:
/// - trims names; blank names and repeated names are dropped
/// - proficiency samples without a readable date, or whose level is not an
///   integer in 1..=5, are dropped
/// - certificates missing a name, issuer or readable issue date are dropped
/// - an unreadable expiry date is ignored and the certificate kept
///
/// Every drop is reported as a `SanitizeIssue`.
pub fn sanitize_skills(skills: Vec<RawSkill>) -> Sanitized<Skill> {
    let mut out = Sanitized::default();

    for raw in skills {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            out.issues.push(issue("", "skill name is blank"));
            continue;
        }
        if out.records.iter().any(|s: &Skill| s.name == name) {
            out.issues.push(issue(&name, "duplicate skill name; first occurrence kept"));
            continue;
        }

        let proficiency = raw
            .proficiency
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| match read_entry(entry) {
                Ok(entry) => Some(entry),
                Err(reason) => {
                    out.issues
                        .push(issue(&name, &format!("proficiency entry {}: {reason}; dropped", i + 1)));
                    None
                }
            })
            .collect();

        let certificates = raw
            .certificates
            .into_iter()
            .filter_map(|cert| match read_certificate(cert, &name, &mut out.issues) {
                Ok(cert) => Some(cert),
                Err(reason) => {
                    out.issues.push(issue(&name, &format!("{reason}; certificate dropped")));
                    None
                }
            })
            .collect();

        out.records.push(Skill {
            name,
            proficiency,
            certificates,
        });
    }

    log_issues(&out.issues);
    out
}

fn read_entry(entry: &RawProficiencyEntry) -> Result<ProficiencyEntry, String> {
    let date = match dates::read_date_value(entry.date.as_ref()) {
        Ok(Some(date)) => date,
        Ok(None) => return Err("missing date".to_string()),
        Err(raw) => return Err(format!("invalid date {raw}")),
    };
    let level = read_level(entry.level.as_ref())?;
    Ok(ProficiencyEntry { date, level })
}

/// Integers, integral floats (`3.0`) and numeric strings are accepted.
fn read_level(value: Option<&Value>) -> Result<u8, String> {
    let v = match value {
        None | Some(Value::Null) => return Err("missing level".to_string()),
        Some(v) => v,
    };
    let level = v
        .as_i64()
        .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| format!("level {v} is not an integer"))?;

    u8::try_from(level)
        .ok()
        .filter(|l| is_valid_level(*l))
        .ok_or_else(|| format!("level {level} outside {MIN_LEVEL}..={MAX_LEVEL}"))
}

fn read_certificate(
    raw: RawCertificate,
    skill: &str,
    issues: &mut Vec<SanitizeIssue>,
) -> Result<Certificate, String> {
    let name = raw.name.trim().to_string();
    if name.is_empty() || raw.issuer.trim().is_empty() {
        return Err("certificate without name or issuer".to_string());
    }
    let issue_date = match dates::read_date_value(raw.issue_date.as_ref()) {
        Ok(Some(date)) => date,
        Ok(None) => return Err(format!("certificate '{name}' has no issue date")),
        Err(value) => return Err(format!("certificate '{name}' has invalid issue date {value}")),
    };
    let expiry_date = dates::read_date_value(raw.expiry_date.as_ref()).unwrap_or_else(|value| {
        issues.push(issue(
            skill,
            &format!("certificate '{name}' has invalid expiry date {value}; treated as non-expiring"),
        ));
        None
    });

    Ok(Certificate {
        name,
        issuer: raw.issuer.trim().to_string(),
        issue_date,
        expiry_date,
        credential_id: raw.credential_id,
        credential_url: raw.credential_url,
        description: raw.description,
    })
}

/// Trims requirement skill names and drops blank ones.
pub fn sanitize_requirements(requirements: Vec<Requirement>) -> Sanitized<Requirement> {
    let mut out = Sanitized::default();
    for mut req in requirements {
        let name = req.skill.trim().to_string();
        if name.is_empty() {
            out.issues.push(issue("", "requirement without a skill name"));
            continue;
        }
        req.skill = name;
        out.records.push(req);
    }
    log_issues(&out.issues);
    out
}

/// Resolves an optional display limit, rejecting 0 and anything above
/// `MAX_DISPLAY_LIMIT`.
pub fn resolve_limit(limit: Option<usize>, default: usize) -> Result<usize, AppError> {
    match limit {
        None => Ok(default),
        Some(n) if (1..=MAX_DISPLAY_LIMIT).contains(&n) => Ok(n),
        Some(n) => Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_DISPLAY_LIMIT}, got {n}"
        ))),
    }
}

fn issue(skill: &str, reason: &str) -> SanitizeIssue {
    SanitizeIssue {
        skill: skill.to_string(),
        reason: reason.to_string(),
    }
}

fn log_issues(issues: &[SanitizeIssue]) {
    for i in issues {
        warn!(skill = %i.skill, "Sanitized input: {}", i.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn raw(value: serde_json::Value) -> RawSkill {
        serde_json::from_value(value).unwrap()
    }

    fn skill(name: &str, levels: &[i64]) -> RawSkill {
        let proficiency: Vec<_> = levels
            .iter()
            .map(|level| json!({ "date": "2023-01-01", "level": level }))
            .collect();
        raw(json!({ "skill": name, "proficiency": proficiency }))
    }

    #[test]
    fn test_out_of_range_levels_dropped() {
        let result = sanitize_skills(vec![skill("React", &[0, 3, 6, 5, -1, 300])]);
        let levels: Vec<u8> = result.records[0].proficiency.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![3, 5]);
        assert_eq!(result.issues.len(), 4);
        assert_eq!(
            result.issues[0].reason,
            "proficiency entry 1: level 0 outside 1..=5; dropped"
        );
        assert_eq!(
            result.issues[2].reason,
            "proficiency entry 5: level -1 outside 1..=5; dropped"
        );
    }

    #[test]
    fn test_unreadable_entries_dropped() {
        let result = sanitize_skills(vec![raw(json!({
            "skill": "Kotlin",
            "proficiency": [
                { "level": 2 },
                { "date": "", "level": 2 },
                { "date": "yesterday", "level": 2 },
                { "date": "2023-01-01", "level": "expert" },
                { "date": "2023-01-01" },
                { "date": "2023-02-01T00:00:00.000Z", "level": 4.0 },
                { "date": "2023-03-01", "level": "3" }
            ]
        }))]);

        let kept: Vec<(NaiveDate, u8)> = result.records[0]
            .proficiency
            .iter()
            .map(|e| (e.date, e.level))
            .collect();
        assert_eq!(kept, vec![(date("2023-02-01"), 4), (date("2023-03-01"), 3)]);

        let reasons: Vec<&str> = result.issues.iter().map(|i| i.reason.as_str()).collect();
        assert_eq!(
            reasons,
            vec![
                "proficiency entry 1: missing date; dropped",
                "proficiency entry 2: missing date; dropped",
                "proficiency entry 3: invalid date \"yesterday\"; dropped",
                "proficiency entry 4: level \"expert\" is not an integer; dropped",
                "proficiency entry 5: missing level; dropped",
            ]
        );
        assert!(result.issues.iter().all(|i| i.skill == "Kotlin"));
    }

    #[test]
    fn test_blank_and_duplicate_names() {
        let result = sanitize_skills(vec![
            skill("  Rust ", &[4]),
            skill("   ", &[2]),
            skill("Rust", &[1]),
            raw(json!({ "proficiency": [] })),
        ]);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "Rust");
        assert_eq!(result.records[0].proficiency[0].level, 4);
        assert_eq!(result.issues.len(), 3);
    }

    #[test]
    fn test_incomplete_certificates_dropped() {
        let result = sanitize_skills(vec![raw(json!({
            "skill": "AWS",
            "proficiency": [{ "date": "2023-01-01", "level": 2 }],
            "certificates": [
                { "name": "SAA", "issuer": "Amazon", "issueDate": "2022-01-01" },
                { "name": "Cloud Practitioner", "issuer": " ", "issueDate": "2021-01-01" },
                { "name": "Developer", "issuer": "Amazon", "issueDate": "" },
                { "name": "SysOps", "issuer": "Amazon", "issueDate": "last year" }
            ]
        }))]);

        let certs = &result.records[0].certificates;
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].name, "SAA");
        assert_eq!(certs[0].issue_date, date("2022-01-01"));
        assert_eq!(result.issues.len(), 3);
        assert_eq!(
            result.issues[1].reason,
            "certificate 'Developer' has no issue date; certificate dropped"
        );
    }

    #[test]
    fn test_unreadable_expiry_keeps_certificate() {
        let result = sanitize_skills(vec![raw(json!({
            "skill": "Kubernetes",
            "certificates": [
                { "name": "CKA", "issuer": "CNCF", "issueDate": "2021-03-01", "expiryDate": "n/a" },
                { "name": "CKAD", "issuer": "CNCF", "issueDate": "2021-04-01", "expiryDate": "" }
            ]
        }))]);

        let certs = &result.records[0].certificates;
        assert_eq!(certs.len(), 2);
        assert!(certs.iter().all(|c| c.expiry_date.is_none()));
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].reason.contains("invalid expiry date \"n/a\""));
    }

    #[test]
    fn test_clean_input_untouched() {
        let result = sanitize_skills(vec![skill("Go", &[1, 2, 3])]);
        let levels: Vec<u8> = result.records[0].proficiency.iter().map(|e| e.level).collect();
        assert_eq!(result.records[0].name, "Go");
        assert_eq!(levels, vec![1, 2, 3]);
        assert!(result.records[0].certificates.is_empty());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None, 5).unwrap(), 5);
        assert_eq!(resolve_limit(Some(3), 5).unwrap(), 3);
        assert!(matches!(resolve_limit(Some(0), 5), Err(AppError::Validation(_))));
        assert!(resolve_limit(Some(MAX_DISPLAY_LIMIT + 1), 5).is_err());
    }

    #[test]
    fn test_requirements_trimmed() {
        let result = sanitize_requirements(vec![
            Requirement {
                skill: " Docker ".to_string(),
                required: 3,
            },
            Requirement {
                skill: "".to_string(),
                required: 2,
            },
        ]);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].skill, "Docker");
        assert_eq!(result.issues.len(), 1);
    }
}
