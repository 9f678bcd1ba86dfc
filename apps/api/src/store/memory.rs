use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Project, RawSkill, UserProfile};
use crate::store::PortfolioStore;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRecords {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Process-local store used when no database is configured, and by tests.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, UserRecords>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a JSON snapshot keyed by user id:
    /// `{ "<uuid>": { "profile": {..}, "skills": [..], "projects": [..] } }`.
    pub fn from_snapshot_json(raw: &str) -> anyhow::Result<Self> {
        let users: HashMap<Uuid, UserRecords> =
            serde_json::from_str(raw).context("Portfolio snapshot is not valid JSON")?;
        let store = Self::new();
        for (user_id, records) in users {
            store.insert(user_id, records)?;
        }
        Ok(store)
    }

    pub async fn from_snapshot_file(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read portfolio snapshot {}", path.display()))?;
        Self::from_snapshot_json(&raw)
    }

    pub fn user_count(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn insert(&self, user_id: Uuid, records: UserRecords) -> anyhow::Result<()> {
        self.users
            .write()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?
            .insert(user_id, records);
        Ok(())
    }

    fn read<T>(&self, user_id: Uuid, f: impl FnOnce(&UserRecords) -> T) -> Result<Option<T>, AppError> {
        let users = self
            .users
            .read()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        Ok(users.get(&user_id).map(f))
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(self.read(user_id, |r| r.profile.clone())?.flatten())
    }

    async fn fetch_skills(&self, user_id: Uuid) -> Result<Vec<RawSkill>, AppError> {
        Ok(self.read(user_id, |r| r.skills.clone())?.unwrap_or_default())
    }

    async fn fetch_projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError> {
        Ok(self.read(user_id, |r| r.projects.clone())?.unwrap_or_default())
    }
}
