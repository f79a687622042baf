//! Shared API types
//!
//! Error taxonomy and its mapping to the documented HTTP contract. Auth
//! failures have their own error type in the auth module; everything else
//! funnels through `ApiError` here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::data::PostgresError;
use crate::domain::LookupError;

/// Standard API error response
///
/// Body shapes follow the public contract: not-found uses the
/// `{success, message}` envelope of the company endpoints, everything else
/// uses a `{"detail": …}` body. Internal detail (query text, credentials)
/// never reaches a response body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { message: String },
    NotFound { message: String },
    ServiceUnavailable,
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn from_postgres(e: PostgresError) -> Self {
        if e.is_unavailable() {
            tracing::error!(error = %e, "Store unavailable");
            Self::ServiceUnavailable
        } else {
            tracing::error!(error = %e, "Store error");
            Self::Internal
        }
    }

    pub fn from_lookup(e: LookupError) -> Self {
        match e {
            LookupError::InvalidDomain => Self::bad_request("Invalid domain"),
            LookupError::Store(e) => Self::from_postgres(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { message } => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "success": false,
                    "message": message
                })),
            )
                .into_response(),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "detail": message })),
            )
                .into_response(),
            Self::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "detail": "Service temporarily unavailable" })),
            )
                .into_response(),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_uses_success_envelope() {
        let response = ApiError::not_found("Company not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Company not found");
    }

    #[tokio::test]
    async fn bad_request_uses_detail_body() {
        let response = ApiError::bad_request("Invalid domain").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Invalid domain");
    }

    #[tokio::test]
    async fn pool_timeout_maps_to_service_unavailable() {
        let err = ApiError::from_postgres(PostgresError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn other_store_errors_map_to_internal_without_detail() {
        let err = ApiError::from_postgres(PostgresError::Config("secret url".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn invalid_domain_maps_to_bad_request() {
        let response = ApiError::from_lookup(LookupError::InvalidDomain).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
