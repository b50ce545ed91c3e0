//! Custom error types specific to authentication failures.
//!
//! Both login failure cases (unknown email, wrong password) collapse into
//! `InvalidCredentials` so a caller cannot tell which accounts exist. Every
//! token problem is reported to the client with the same message.

use thiserror::Error;

use crate::database::StoreError;
use crate::errors::AppError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Invalid Authorization header format, expected 'Bearer <token>'")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token subject no longer exists")]
    UnknownTeacher,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Credential adapter failure: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            AuthError::MissingToken => AppError::Unauthorized("Not authenticated".to_string()),
            AuthError::MalformedHeader
            | AuthError::InvalidToken(_)
            | AuthError::UnknownTeacher => {
                AppError::Unauthorized("Invalid authentication".to_string())
            }
            AuthError::EmailTaken => AppError::Conflict(err.to_string()),
            AuthError::InvalidEmail(_) => AppError::Validation(err.to_string()),
            AuthError::Internal(msg) => AppError::Internal(msg),
            AuthError::Store(e) => e.into(),
        }
    }
}
