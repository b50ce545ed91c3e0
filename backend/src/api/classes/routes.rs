//! Defines the HTTP routes for class management. Mounted under `/api/classes`.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers::{add_student, create_class, get_class, get_leaderboard, list_classes};
use crate::state::AppState;

pub fn classes_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_class).get(list_classes))
        .route("/{class_id}", get(get_class))
        .route("/{class_id}/students", post(add_student))
        .route("/{class_id}/leaderboard", get(get_leaderboard))
}
