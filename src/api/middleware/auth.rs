//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Rejects requests that do not carry a valid `Authorization: Bearer`
/// token.
///
/// The token's signature and expiry are checked against the server
/// signing secret, so verification needs no database round trip. A
/// missing or malformed header, a bad signature, or an expired token all
/// produce `401 Unauthorized`.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Authorization header is missing or invalid"))?;

    let req = Request::from_parts(parts, body);

    st.auth_service.verify_token(&token)?;

    Ok(next.run(req).await)
}
