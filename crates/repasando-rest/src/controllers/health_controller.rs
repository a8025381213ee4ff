//! Health endpoints.
//!
//! `/health` reports whether the database answers; `/live` only tells that
//! the process is serving requests.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `UP` or `DOWN`.
    pub status: &'static str,
    /// Store engine behind the API.
    pub database: String,
    /// Application version.
    pub version: &'static str,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
}

/// Database-backed health check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, code) = match state.database.health_check().await {
        Ok(()) => ("UP", StatusCode::OK),
        Err(err) => {
            warn!("Health check failed: {}", err);
            ("DOWN", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    let body = HealthResponse {
        status,
        database: state.database.backend().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    };
    (code, Json(body))
}

/// Liveness check endpoint.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Process is serving requests")
    )
)]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
