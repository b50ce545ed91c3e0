//! HS256 JWT implementation of the `TokenIssuer` trait.
//!
//! Tokens carry the teacher id as `sub` plus `iat`/`exp`. The signing secret is
//! supplied by the caller (see the backend config); nothing here has a default.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::errors::AdapterError;
use crate::models::{Claims, IssuedToken};
use crate::TokenIssuer;

/// Default token lifetime: 7 days.
pub const DEFAULT_TTL_HOURS: i64 = 24 * 7;

#[derive(Clone)]
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_aud = false;
        validation
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, subject: &str) -> Result<IssuedToken, AdapterError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AdapterError::TokenIssue(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<String, AdapterError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Self::validation()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AdapterError::ExpiredToken,
                _ => {
                    debug!("JWT validation failed: {}", e);
                    AdapterError::InvalidToken(e.to_string())
                }
            },
        )?;

        if data.claims.sub.is_empty() {
            return Err(AdapterError::InvalidToken("empty subject".to_string()));
        }
        Ok(data.claims.sub)
    }
}
