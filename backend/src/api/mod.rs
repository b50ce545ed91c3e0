//! Central module for organizing the application's main API endpoints.
//!
//! This module groups the class and point endpoints, plus the pieces every
//! endpoint shares: the JSON body extractor and the health check.
//! Authentication routes live in `crate::auth`.

pub mod classes;
pub mod points;

use axum::{extract::FromRequest, Json};
use serde::Serialize;

use crate::errors::AppError;

/// `Json` whose rejections are reported as `AppError`, so malformed bodies get
/// the same error shape as everything else.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Ground Education Platform API",
    })
}
