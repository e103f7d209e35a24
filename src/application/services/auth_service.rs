//! Authentication service: credential verification and JWT access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::password::verify_password;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Claims carried in issued access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
    pub expires_at: chrono::DateTime<Utc>,
}

/// Service for logging users in and verifying Bearer tokens.
///
/// Tokens are HS256 JWTs signed with a server-side secret. Verification is
/// pure: no database round trip per request.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    jwt_secret: String,
    token_ttl_seconds: i64,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: Arc<R>, jwt_secret: String, token_ttl_seconds: i64) -> Self {
        Self {
            repository,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error, so the
    /// response does not reveal which part was wrong.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] when the email/password
    /// pair does not match a user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Wrong email or password"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::invalid_credentials("Wrong email or password"));
        }

        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.token_ttl_seconds);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to sign access token")
        })?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(Session {
            user_id: user.id,
            name: user.name,
            email: user.email,
            token,
            expires_at,
        })
    }

    /// Verifies an access token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for invalid, tampered, or
    /// expired tokens.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized("Invalid or expired token"))
    }
}
