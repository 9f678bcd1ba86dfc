pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::matching::handlers as matching;
use crate::portfolio::handlers as portfolio;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Snapshot analysis: the caller sends the records
        .route("/api/v1/analysis/skills", post(skills::handle_analyze_skills))
        .route("/api/v1/analysis/skills/chart", post(skills::handle_skill_chart))
        .route("/api/v1/analysis/gap", post(matching::handle_analyze_gap))
        .route("/api/v1/analysis/jobs", post(matching::handle_match_jobs))
        .route(
            "/api/v1/analysis/portfolio",
            post(portfolio::handle_assemble_portfolio),
        )
        // Store-backed views
        .route(
            "/api/v1/users/:user_id/portfolio",
            get(portfolio::handle_user_portfolio),
        )
        .route(
            "/api/v1/users/:user_id/dashboard",
            get(portfolio::handle_user_dashboard),
        )
        .route("/api/v1/users/:user_id/gap", post(matching::handle_user_gap))
        .route(
            "/api/v1/users/:user_id/jobs/search",
            post(matching::handle_search_jobs),
        )
        .with_state(state)
}

/// CORS restricted to the configured client origins.
pub fn cors_layer(client_urls: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = client_urls
        .iter()
        .filter_map(|url| match HeaderValue::from_str(url) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{url}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
