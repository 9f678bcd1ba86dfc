use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL. When unset the service runs on an in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// JSON snapshot loaded into the in-memory store when no database is set.
    pub portfolio_snapshot: Option<PathBuf>,
    /// Jooble API key. When unset job search is disabled.
    pub jooble_api_key: Option<String>,
    /// CORS allow-list.
    pub client_urls: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            portfolio_snapshot: optional_env("PORTFOLIO_SNAPSHOT").map(PathBuf::from),
            jooble_api_key: optional_env("JOOBLE_API_KEY"),
            client_urls: parse_client_urls(optional_env("CLIENT_URLS").as_deref()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_client_urls(raw: Option<&str>) -> Vec<String> {
    let urls: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        vec![DEFAULT_CLIENT_URL.to_string()]
    } else {
        urls
    }
}
