/// Jooble client: thin wrapper over the Jooble job search REST API.
///
/// Jooble listings carry no structured skill tags, so `into_listing` derives
/// them from the search keywords that occur in the title or snippet.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::JobListing;

const JOOBLE_API_URL: &str = "https://jooble.org/api";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum JoobleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    keywords: &'a str,
    location: &'a str,
    page: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoobleResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub jobs: Vec<JoobleJob>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JoobleJob {
    pub id: Value,
    pub title: String,
    pub location: String,
    pub snippet: String,
    pub salary: String,
    pub company: String,
    pub link: Option<String>,
    pub updated: Option<String>,
}

#[derive(Clone)]
pub struct JoobleClient {
    client: Client,
    api_key: String,
}

impl JoobleClient {
    pub fn new(api_key: String) -> Result<Self, JoobleError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
        })
    }

    /// Runs one search. Retries on 429 and 5xx with exponential backoff.
    pub async fn search(
        &self,
        keywords: &str,
        location: &str,
        page: u32,
    ) -> Result<JoobleResponse, JoobleError> {
        let url = format!("{JOOBLE_API_URL}/{}", self.api_key);
        let body = SearchBody {
            keywords,
            location,
            page,
        };

        let mut last_error: Option<JoobleError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Jooble search attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(&body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(JoobleError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Jooble API returned {}: {}", status, message);
                last_error = Some(JoobleError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(JoobleError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: JoobleResponse = response.json().await?;
            debug!(
                "Jooble search succeeded: total_count={}, returned={}",
                parsed.total_count,
                parsed.jobs.len()
            );
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(JoobleError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Splits a comma-separated keyword string into trimmed, non-empty terms.
pub fn keyword_terms(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a Jooble job into a listing. Tags are the search terms found in
/// the title or (HTML-stripped) snippet, compared case-insensitively.
pub fn into_listing(job: JoobleJob, terms: &[String]) -> JobListing {
    let description = strip_html(&job.snippet);
    let haystack = format!("{} {}", job.title, description).to_lowercase();

    let tags = terms
        .iter()
        .filter(|t| haystack.contains(&t.to_lowercase()))
        .cloned()
        .collect();

    let id = match &job.id {
        Value::String(s) => s.clone(),
        Value::Null => job.link.clone().unwrap_or_default(),
        other => other.to_string(),
    };

    JobListing {
        id,
        title: job.title,
        company: job.company,
        tags,
        location: job.location,
        salary: job.salary,
        description,
        link: job.link,
    }
}

/// Removes markup from Jooble snippets (`<b>React</b>&nbsp;developer`).
fn strip_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
