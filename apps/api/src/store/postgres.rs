use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::models::skill::SkillRow;
use crate::models::{Project, RawSkill, UserProfile};
use crate::store::PortfolioStore;

#[derive(Clone)]
pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT name, title, email, phone, location
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn fetch_skills(&self, user_id: Uuid) -> Result<Vec<RawSkill>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, user_id, skill, proficiency, certificates, created_at
            FROM skills
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} skills for user {user_id}", rows.len());
        Ok(rows.into_iter().map(RawSkill::from).collect())
    }

    async fn fetch_projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, user_id, title, tags, start_date, end_date, description, link, created_at
            FROM projects
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} projects for user {user_id}", rows.len());
        Ok(rows.into_iter().map(Project::from).collect())
    }
}
