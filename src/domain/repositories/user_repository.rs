//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::listing::{ListQuery, SearchFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmailTaken`] if the email is already registered.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by email. Used by login and the uniqueness guard.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists users for a resolved listing query.
    async fn list(&self, query: &ListQuery) -> Result<Vec<User>, AppError>;

    /// Counts users matching the filter; all users when `None`.
    async fn count(&self, filter: Option<SearchFilter>) -> Result<i64, AppError>;

    /// Partially updates name/email. Returns `Ok(None)` when the user does
    /// not exist.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Replaces the stored password hash. Returns `Ok(false)` when the user
    /// does not exist.
    async fn set_password_hash(&self, id: i64, password_hash: &str) -> Result<bool, AppError>;

    /// Deletes a user. Returns `Ok(false)` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
