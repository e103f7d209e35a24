//! User account service: listing, registration, profile updates, and
//! password changes.

use std::sync::Arc;

use crate::application::password::{hash_password, verify_password};
use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::listing::{ListRequest, PageMeta, USER_LISTING};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for user account management.
///
/// Passwords are hashed before they reach the repository; the stored hash
/// is never returned past this layer's callers.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists users with pagination, sorting, and search.
    pub async fn list_users(
        &self,
        request: &ListRequest,
    ) -> Result<(Vec<User>, PageMeta), AppError> {
        let parsed = USER_LISTING
            .parse(request)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let total = self.repository.count(parsed.filter().cloned()).await?;

        let query = parsed
            .paginate(total)
            .map_err(|e| AppError::validation(e.to_string()))?;

        let users = self.repository.list(&query).await?;
        let meta = query.meta(users.len());

        Ok((users, meta))
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown user"))
    }

    /// Registers a new user after checking the email is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmailTaken`] when the email is already
    /// registered.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, AppError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::email_taken("Email is already registered"));
        }

        let password_hash = hash_password(password)?;

        self.repository
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await
    }

    /// Updates name/email. Omitted fields keep their current value; a
    /// changed email must not belong to another user.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let existing = self.get_user(id).await?;

        if let Some(email) = &patch.email
            && let Some(holder) = self.repository.find_by_email(email).await?
            && holder.id != existing.id
        {
            return Err(AppError::email_taken("Email is already registered"));
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::unprocessable("Failed to update user"))
    }

    /// Deletes a user by id.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::unprocessable("Failed to delete user"));
        }

        Ok(())
    }

    /// Changes a user's password after verifying the old one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] when the old password does
    /// not match.
    pub async fn change_password(
        &self,
        id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_user(id).await?;

        if !verify_password(old_password, &user.password_hash)? {
            return Err(AppError::invalid_credentials("Wrong old password"));
        }

        let password_hash = hash_password(new_password)?;

        let changed = self.repository.set_password_hash(id, &password_hash).await?;
        if !changed {
            return Err(AppError::unprocessable("Failed to change password"));
        }

        Ok(())
    }
}
