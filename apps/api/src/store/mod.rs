//! Portfolio Store: read access to a user's profile, skills and projects.
//!
//! Carried in `AppState` as `Arc<dyn PortfolioStore>`; the write path (CRUD)
//! lives outside this service.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Project, RawSkill, UserProfile};

pub use memory::MemoryStore;
pub use postgres::PgPortfolioStore;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError>;

    /// Skills in creation order.
    async fn fetch_skills(&self, user_id: Uuid) -> Result<Vec<RawSkill>, AppError>;

    /// Projects in creation order.
    async fn fetch_projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError>;
}
