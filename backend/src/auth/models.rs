//! Request and response bodies for the authentication endpoints.

use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use crate::database::TeacherProfile;

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub school: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by both signup and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub teacher: TeacherProfile,
}

/// Shape check only: one `@`, a non-empty local part, a dotted domain, no
/// whitespace. Comparison elsewhere stays exact and case-sensitive.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}
