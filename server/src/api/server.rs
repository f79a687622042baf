//! API server initialization

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use tower_http::compression::CompressionLayer;

use super::auth::{ApiToken, AuthState, require_auth};
use super::middleware;
use super::openapi::{openapi_json, swagger_ui_html};
use super::routes::health::HealthApiState;
use super::routes::{companies, health, root, stats};
use crate::core::CoreApp;

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let app = self.app;

        // Clone shutdown before moving app
        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let auth_state = AuthState {
            token: ApiToken::new(app.config.auth.token.clone()),
        };

        // Protected routes: every company and stats operation requires the
        // bearer token. Health, banner and docs stay open.
        let protected_routes = Router::new()
            .merge(companies::routes(app.companies.clone()))
            .merge(stats::routes(app.companies.clone()))
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                require_auth,
            ));

        let health_routes = Router::new()
            .route("/health", get(health::health))
            .with_state(HealthApiState {
                database: app.database.clone(),
            });

        let router = Router::new()
            .route("/", get(root::service_info))
            .route("/api/openapi.json", get(openapi_json))
            .route("/api/docs", get(swagger_ui_html))
            .merge(health_routes)
            .merge(protected_routes)
            .fallback(middleware::handle_404)
            .layer(CompressionLayer::new())
            .layer(middleware::cors());

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}
