//! Top-level router: public and protected route sets composed with the
//! middleware stack.
//!
//! `POST /authentication/login`, `POST /shop/products`, `POST /users`,
//! and `GET /health` are public; everything else under `/shop` and
//! `/users` sits behind the Bearer middleware. Both sets get per-IP rate
//! limiting and request tracing, and trailing slashes are normalized
//! before routing.

use crate::api;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::api_layer());

    let public = api::routes::public_routes().layer(rate_limit::public_layer());

    let router = Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
