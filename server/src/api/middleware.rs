//! HTTP middleware (CORS, 404 handler)

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower_http::cors::{Any, CorsLayer};

/// Create CORS layer
///
/// The API is read-only and token-protected; origins are not restricted.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Handle 404 Not Found with a JSON body
pub async fn handle_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}
