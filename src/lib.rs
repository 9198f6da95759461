use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

/// Build the full router. Split out of `main` so the integration tests can
/// drive it with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    // The journal has no auth and serves any browser origin, so CORS is
    // deliberately wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/mood",
            get(handlers::moods::list_moods).post(handlers::moods::create_mood),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
