//! DTOs for the authentication endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::auth_service::Session;

/// Request body for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        LoginResponse {
            id: session.user_id,
            name: session.name,
            email: session.email,
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}
