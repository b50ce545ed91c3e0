//! Middleware for protecting authenticated routes.
//!
//! `AuthenticatedTeacher` is an extractor: adding it to a handler's arguments
//! makes the route require a valid `Authorization: Bearer <token>` header whose
//! subject still exists in the store.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;

use super::errors::AuthError;
use crate::database::Teacher;
use crate::errors::AppError;
use crate::state::AppState;

/// The teacher behind the request's bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedTeacher(pub Teacher);

/// Extract the token from an `Authorization` header value.
/// Expected format: "Bearer <token>". The scheme name is case-insensitive.
pub fn extract_bearer(auth_header: Option<&str>) -> Result<&str, AuthError> {
    let value = auth_header.ok_or(AuthError::MissingToken)?;
    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

impl FromRequestParts<Arc<AppState>> for AuthenticatedTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        let token = extract_bearer(header)?;

        let teacher = state.auth.authenticate(state.db.as_ref(), token).await?;
        Ok(AuthenticatedTeacher(teacher))
    }
}
