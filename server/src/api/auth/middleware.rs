//! Authentication middleware
//!
//! Every protected route requires `Authorization: Bearer <token>` matching
//! the single process-wide token loaded at startup. The token is injected
//! through `AuthState`, never read from a global, so tests can substitute
//! credentials freely.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use subtle::ConstantTimeEq;

/// The static API bearer token
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Constant-time comparison against a presented credential
    pub fn verify(&self, presented: &str) -> bool {
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(..)")
    }
}

/// Authentication error response
///
/// Mirrors the documented contract: a missing (or non-Bearer) credential is
/// 403, a presented-but-wrong credential is 401.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    Missing,
    Invalid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Missing => (StatusCode::FORBIDDEN, "Not authenticated"),
            Self::Invalid => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing authentication token",
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Shared auth state for middleware
#[derive(Clone)]
pub struct AuthState {
    pub token: ApiToken,
}

/// Authentication middleware for protected routes
pub async fn require_auth(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Missing)?;

    let presented = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Missing)?;

    if !state.token.verify(presented) {
        return Err(AuthError::Invalid);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::{Router, middleware};
    use tower::ServiceExt;

    fn protected_router(token: &str) -> Router {
        let state = AuthState {
            token: ApiToken::new(token),
        };
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(state, require_auth))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn token_verification() {
        let token = ApiToken::new("secret");
        assert!(token.verify("secret"));
        assert!(!token.verify("Secret"));
        assert!(!token.verify("secret "));
        assert!(!token.verify(""));
    }

    #[tokio::test]
    async fn missing_header_is_403_not_authenticated() {
        let response = protected_router("secret")
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "detail": "Not authenticated" }));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_403() {
        let response = protected_router("secret")
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, "Basic c2VjcmV0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn wrong_token_is_401_invalid() {
        let response = protected_router("secret")
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({ "detail": "Invalid or missing authentication token" })
        );
    }

    #[tokio::test]
    async fn correct_token_passes_through() {
        let response = protected_router("secret")
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header(header::AUTHORIZATION, "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
