//! Health check endpoint

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::PostgresService;

/// Shared state for the health endpoint
#[derive(Clone)]
pub struct HealthApiState {
    pub database: Arc<PostgresService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Health check endpoint
///
/// Never fails the request: an unreachable store degrades the body, the
/// status stays 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health, degraded when the store is unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<HealthApiState>) -> impl IntoResponse {
    match state.database.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health probe failed");
            Json(HealthResponse {
                status: "unhealthy",
                database: "unreachable",
            })
        }
    }
}
