mod config;
mod db;
mod errors;
mod jooble_client;
mod matching;
mod models;
mod portfolio;
mod routes;
mod skills;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jooble_client::JoobleClient;
use crate::matching::{DisabledJobSource, JobSource, JoobleJobSource};
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;
use crate::store::{MemoryStore, PgPortfolioStore, PortfolioStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillPlot API v{}", env!("CARGO_PKG_VERSION"));

    // Portfolio store: PostgreSQL, or process-local when no database is configured
    let store: Arc<dyn PortfolioStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.db_max_connections).await?;
            Arc::new(PgPortfolioStore::new(pool))
        }
        None => match &config.portfolio_snapshot {
            Some(path) => {
                let store = MemoryStore::from_snapshot_file(path).await?;
                info!(
                    "DATABASE_URL not set; serving {} users from snapshot {}",
                    store.user_count(),
                    path.display()
                );
                Arc::new(store)
            }
            None => {
                warn!("DATABASE_URL not set; serving from an empty in-memory store");
                Arc::new(MemoryStore::new())
            }
        },
    };

    // Job source: Jooble when a key is configured
    let jobs: Arc<dyn JobSource> = match &config.jooble_api_key {
        Some(key) => {
            info!("Jooble job search enabled");
            Arc::new(JoobleJobSource(JoobleClient::new(key.clone())?))
        }
        None => {
            warn!("JOOBLE_API_KEY not set; job search disabled");
            Arc::new(DisabledJobSource)
        }
    };

    let state = AppState { store, jobs };

    info!("CORS origins: {}", config.client_urls.join(", "));
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.client_urls));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
