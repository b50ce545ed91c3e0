//! Ground backend: a classroom points API.
//!
//! Teachers sign up and log in, create classes, enroll students and record
//! signed point transactions; totals and leaderboards are derived from the
//! ledger on every read. All data lives in memory for the lifetime of the
//! process.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::Config;
pub use errors::{AppError, AppResult};
pub use state::AppState;

/// Assembles every route plus the CORS and tracing layers.
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(api::health))
        .nest("/api/auth", auth::auth_router())
        .nest("/api/classes", api::classes::classes_router())
        .merge(api::points::points_router())
        .layer(middleware::cors_layer(cors_origins))
        .layer(middleware::trace_layer())
        .with_state(state)
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ground_backend=debug,tower_http=info")),
        )
        .init();
}
