//! Job Source: pluggable provider of job listings for the match board.
//!
//! Default: `JoobleJobSource`. When no API key is configured the service
//! runs with `DisabledJobSource`, which reports job search as unavailable.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jooble_client::{into_listing, keyword_terms, JoobleClient};
use crate::models::JobListing;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    /// Comma-separated search terms, e.g. `"React, Node.js"`.
    pub keywords: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, AppError>;
}

pub struct JoobleJobSource(pub JoobleClient);

#[async_trait]
impl JobSource for JoobleJobSource {
    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, AppError> {
        let response = self
            .0
            .search(&query.keywords, &query.location, query.page)
            .await?;
        let terms = keyword_terms(&query.keywords);

        info!(
            "Jooble returned {} of {} listings for '{}'",
            response.jobs.len(),
            response.total_count,
            query.keywords
        );

        Ok(response
            .jobs
            .into_iter()
            .map(|job| into_listing(job, &terms))
            .collect())
    }
}

pub struct DisabledJobSource;

#[async_trait]
impl JobSource for DisabledJobSource {
    async fn search(&self, _query: &JobQuery) -> Result<Vec<JobListing>, AppError> {
        Err(AppError::JobSearchUnavailable(
            "Jooble API key not configured. Set JOOBLE_API_KEY to enable job search".to_string(),
        ))
    }
}
