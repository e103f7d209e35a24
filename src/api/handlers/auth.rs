//! Handler for the login endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::{ClientAddr, client_ip};

/// Authenticates a user and issues an access token.
///
/// # Endpoint
///
/// `POST /authentication/login`
///
/// # Rate Limiting
///
/// Failed attempts are counted per client IP in a fixed window; once the
/// limit is reached, further attempts get 403 with the window reset time.
/// Successful logins do not count and clear the caller's window.
///
/// # Errors
///
/// Returns 403 for wrong credentials or when the attempt limit is hit.
pub async fn login_handler(
    State(state): State<AppState>,
    ClientAddr(peer): ClientAddr,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let addr = client_ip(&headers, peer, state.behind_proxy);

    if let Some(addr) = addr {
        state.login_tracker.check(addr)?;
    }

    match state
        .auth_service
        .login(&payload.email, &payload.password)
        .await
    {
        Ok(session) => {
            if let Some(addr) = addr {
                state.login_tracker.record_success(addr);
            }
            Ok(Json(LoginResponse::from(session)))
        }
        Err(err) => {
            if let Some(addr) = addr
                && matches!(err, AppError::InvalidCredentials { .. })
            {
                state.login_tracker.record_failure(addr);
                tracing::warn!(%addr, "Failed login attempt");
            }
            Err(err)
        }
    }
}
