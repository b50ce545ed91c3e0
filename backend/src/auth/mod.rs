//! Authentication module for teacher accounts, sessions, and access control.
//!
//! This module provides the public interface for signup, login, token
//! validation and the `AuthenticatedTeacher` extractor that guards every
//! other route.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
pub use service::*;
