//! Core business logic for the authentication system.
//!
//! This service handles teacher signup, password verification, token issuance
//! and token validation. The cryptographic primitives come from the
//! `ground-adapters` crate through its traits; storage goes through the
//! `Repository` handed in by the caller.

use chrono::Utc;
use ground_adapters::{AdapterError, JwtIssuer, PasswordHasher, Pbkdf2Hasher, TokenIssuer};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::AuthError;
use super::models::{validate_email, AuthResponse, LoginRequest, SignupRequest};
use crate::config::Config;
use crate::database::{Repository, StoreError, Teacher, TeacherProfile};

#[derive(Clone)]
pub struct AuthService {
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { hasher, tokens }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(Pbkdf2Hasher::new(config.password_hash_iterations)),
            Arc::new(JwtIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl())),
        )
    }

    /// Registers a new teacher and signs them in.
    pub async fn signup(
        &self,
        db: &dyn Repository,
        req: SignupRequest,
    ) -> Result<AuthResponse, AuthError> {
        validate_email(&req.email)?;

        if db.teacher_by_email(&req.email).await?.is_some() {
            debug!("Signup rejected, email already registered");
            return Err(AuthError::EmailTaken);
        }

        let password_hash = self.hash_password(req.password).await?;
        let teacher = Teacher {
            id: Uuid::new_v4(),
            email: req.email,
            name: req.name,
            school: req.school,
            password_hash,
            created_at: Utc::now(),
        };

        let profile = TeacherProfile::from(&teacher);
        db.insert_teacher(teacher).await.map_err(|e| match e {
            StoreError::DuplicateEmail(_) => AuthError::EmailTaken,
            other => AuthError::Store(other),
        })?;

        info!(teacher_id = %profile.id, "Teacher signed up");
        self.session_for(profile)
    }

    pub async fn login(
        &self,
        db: &dyn Repository,
        req: LoginRequest,
    ) -> Result<AuthResponse, AuthError> {
        validate_email(&req.email)?;

        let teacher = match db.teacher_by_email(&req.email).await? {
            Some(teacher) => teacher,
            None => {
                warn!("Login failed");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .verify_password(req.password, teacher.password_hash.clone())
            .await?
        {
            warn!(teacher_id = %teacher.id, "Login failed");
            return Err(AuthError::InvalidCredentials);
        }

        info!(teacher_id = %teacher.id, "Teacher logged in");
        self.session_for(TeacherProfile::from(&teacher))
    }

    /// Resolves a bearer token to the teacher it was issued for.
    pub async fn authenticate(
        &self,
        db: &dyn Repository,
        token: &str,
    ) -> Result<Teacher, AuthError> {
        let subject = self.tokens.verify(token).map_err(|e| {
            warn!("Rejected token: {}", e);
            match e {
                AdapterError::ExpiredToken => AuthError::InvalidToken("expired".to_string()),
                other => AuthError::InvalidToken(other.to_string()),
            }
        })?;

        let teacher_id = Uuid::parse_str(&subject)
            .map_err(|_| AuthError::InvalidToken("subject is not a teacher id".to_string()))?;

        // Storage is volatile: a token can outlive the teacher it names.
        db.teacher_by_id(teacher_id).await?.ok_or_else(|| {
            warn!(%teacher_id, "Token subject not found");
            AuthError::UnknownTeacher
        })
    }

    fn session_for(&self, teacher: TeacherProfile) -> Result<AuthResponse, AuthError> {
        let issued = self
            .tokens
            .issue(&teacher.id.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        debug!(teacher_id = %teacher.id, expires_at = %issued.expires_at, "Issued token");
        Ok(AuthResponse {
            token: issued.token,
            teacher,
        })
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}
