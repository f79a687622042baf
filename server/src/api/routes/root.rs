//! Service banner endpoint

use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

use crate::core::constants::APP_NAME;

/// Service banner with endpoint index
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner")
    )
)]
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": format!("{} Company API", APP_NAME),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/health": "Health check",
            "/company/domain/{domain}": "Get company by domain",
            "/companies/search": "Search companies",
            "/stats": "Get database statistics",
            "/api/docs": "Interactive API documentation"
        }
    }))
}
