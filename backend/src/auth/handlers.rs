//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse the request bodies, hand off to `auth::service` for
//! the actual work and serialize the result.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::middleware::AuthenticatedTeacher;
use super::models::{AuthResponse, LoginRequest, SignupRequest};
use crate::api::ApiJson;
use crate::database::TeacherProfile;
use crate::errors::AppResult;
use crate::state::AppState;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> AppResult<Json<AuthResponse>> {
    let session = state.auth.signup(state.db.as_ref(), req).await?;
    Ok(Json(session))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let session = state.auth.login(state.db.as_ref(), req).await?;
    Ok(Json(session))
}

pub async fn me(AuthenticatedTeacher(teacher): AuthenticatedTeacher) -> Json<TeacherProfile> {
    Json(TeacherProfile::from(&teacher))
}
