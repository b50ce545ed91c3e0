//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while hashing passwords or while
//! issuing and verifying tokens, providing a unified error type for all
//! credential adapters.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token could not be issued: {0}")]
    TokenIssue(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,
}
