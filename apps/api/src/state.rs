use std::sync::Arc;

use crate::matching::JobSource;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read access to profiles, skills and projects. Default: PostgreSQL.
    pub store: Arc<dyn PortfolioStore>,
    /// Pluggable job listing provider. Default: Jooble, disabled without a key.
    pub jobs: Arc<dyn JobSource>,
}
