//! Defines the HTTP routes specifically for authentication.
//!
//! Mounted under `/api/auth` by the main router.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers::{login, me, signup};
use crate::state::AppState;

pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}
