//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::list::{ListParams, ListResponse};
use crate::api::dto::product::DeletedResponse;
use crate::api::dto::user::{
    ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserItem,
};
use crate::domain::entities::UserPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists users with pagination, sorting, and search.
///
/// # Endpoint
///
/// `GET /users`
pub async fn user_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse<UserItem>>, AppError> {
    let (users, meta) = state.user_service.list_users(&params.into()).await?;

    let items = users.into_iter().map(UserItem::from).collect();

    Ok(Json(ListResponse::new(meta, items)))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn user_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserItem::from(user)))
}

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 when the password confirmation does not match and 422 when
/// the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    if payload.password != payload.password_confirm {
        return Err(AppError::validation("Password confirmation mismatched"));
    }

    let user = state
        .user_service
        .create_user(payload.name, payload.email, &payload.password)
        .await?;

    Ok(Json(UserItem::from(user)))
}

/// Updates a user's name/email. Omitted fields keep their current value.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown user and 422 when the email belongs to
/// another user.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    let patch = UserPatch {
        name: payload.name,
        email: payload.email,
    };

    let user = state.user_service.update_user(id, patch).await?;

    Ok(Json(UserItem::from(user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 422 when nothing was deleted.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(Json(DeletedResponse { id }))
}

/// Changes a user's password.
///
/// # Endpoint
///
/// `POST /users/{id}/change-password`
///
/// # Errors
///
/// Returns 400 when the confirmation does not match and 403 when the old
/// password is wrong.
pub async fn change_password_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    if payload.password_new != payload.password_confirm {
        return Err(AppError::validation("Password confirmation mismatched"));
    }

    state
        .user_service
        .change_password(id, &payload.password_old, &payload.password_new)
        .await?;

    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserItem::from(user)))
}
