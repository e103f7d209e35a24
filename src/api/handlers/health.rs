//! Health check handler.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports service liveness and database reachability.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always returns 200; a failing database ping is reported in the body so
/// probes can distinguish degraded from down.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = ?e, "Health check database ping failed");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        database,
    })
}
