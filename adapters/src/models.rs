//! Data models shared by the credential adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims. `sub` carries the teacher id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
