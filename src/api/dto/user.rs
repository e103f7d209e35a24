//! DTOs for user management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// JSON projection of a user. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        UserItem {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Request body for registering a user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 32))]
    pub password: String,

    /// Must repeat `password`; compared in the handler.
    pub password_confirm: String,
}

/// Request body for updating a user's profile.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// Request body for changing a password.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub password_old: String,

    #[validate(length(min = 6, max = 32))]
    pub password_new: String,

    /// Must repeat `password_new`; compared in the handler.
    pub password_confirm: String,
}
