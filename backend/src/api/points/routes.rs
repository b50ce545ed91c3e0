//! Defines the HTTP routes for the point ledger.
//!
//! These span two prefixes, so the router carries full paths and is merged
//! rather than nested.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers::{create_point, get_student_points};
use crate::state::AppState;

pub fn points_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/points", post(create_point))
        .route("/api/students/{student_id}/points", get(get_student_points))
}
