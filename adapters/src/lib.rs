//! Core `adapters` crate for the cryptographic collaborators of the Ground backend.
//!
//! This crate defines the `PasswordHasher` and `TokenIssuer` traits, which outline
//! the minimal contracts the backend needs for credential storage and session
//! tokens, and provides the concrete implementations (PBKDF2, HS256 JWT).
//! The backend only ever talks to the traits, so either primitive can be
//! swapped without touching handler logic.

pub mod errors;
pub mod jwt;
pub mod models;
pub mod password;

pub use errors::AdapterError;
pub use jwt::JwtIssuer;
pub use models::{Claims, IssuedToken};
pub use password::Pbkdf2Hasher;

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing string.
    fn hash(&self, plain: &str) -> Result<String, AdapterError>;

    /// Check a plaintext password against a stored hash. Malformed hashes never match.
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

/// Issues and verifies signed, expiring credentials carrying a subject id.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &str) -> Result<IssuedToken, AdapterError>;

    /// Returns the subject when the signature and expiry check out.
    fn verify(&self, token: &str) -> Result<String, AdapterError>;
}
