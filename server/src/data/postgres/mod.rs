//! PostgreSQL database service
//!
//! Provides centralized database management for the company store:
//! - Connection pooling with min/max bounds
//! - Idle connection cleanup and connection lifetime cycling
//! - Query timeout protection (statement_timeout)
//! - Startup capability probe for trigram name matching
//!
//! All schema definitions and migrations are managed here.

pub mod error;
pub mod filters;
mod migrations;
pub mod repositories;
pub mod schema;

pub use error::PostgresError;
pub use filters::{NameMatch, SearchFilters};
pub use sqlx::PgPool;

use std::sync::Arc;
use std::time::Duration;

use sqlx::ConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::log::LevelFilter;

use crate::core::config::PostgresConfig;
use crate::core::constants::DB_HEALTH_CHECK_INTERVAL_SECS;

/// PostgreSQL database service
///
/// Handles pool initialization, migrations, and background health checks.
/// Created once at server startup and shared across all request handlers.
pub struct PostgresService {
    pool: PgPool,
}

impl PostgresService {
    /// Initialize the database service from configuration
    ///
    /// The pool is the only shared resource between concurrent requests:
    /// acquire_timeout bounds how long a request blocks when the pool is
    /// exhausted, and statement_timeout aborts in-flight queries that
    /// exceed their deadline instead of holding a connection.
    pub async fn init(config: &PostgresConfig) -> Result<Self, PostgresError> {
        let url = config.url.as_str();
        if url.is_empty() {
            return Err(PostgresError::Config("PostgreSQL URL is required".into()));
        }

        let mut options: PgConnectOptions = url
            .parse()
            .map_err(|e| PostgresError::Config(format!("Invalid PostgreSQL URL: {}", e)))?;

        options = options.log_statements(LevelFilter::Trace);

        if config.statement_timeout_secs > 0 {
            options = options.options([(
                "statement_timeout",
                format!("{}s", config.statement_timeout_secs),
            )]);
        }

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect_with(options)
            .await?;

        migrations::run_migrations(&pool).await?;

        tracing::debug!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            acquire_timeout_secs = config.acquire_timeout_secs,
            idle_timeout_secs = config.idle_timeout_secs,
            max_lifetime_secs = config.max_lifetime_secs,
            statement_timeout_secs = config.statement_timeout_secs,
            "PostgresService initialized"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Probe for the pg_trgm extension and pick the name-match strategy
    ///
    /// Runs once at startup; the result is held by the lookup service so
    /// query construction never re-branches on capability at request time.
    pub async fn detect_name_match(&self) -> NameMatch {
        let has_trgm: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM pg_extension WHERE extname = 'pg_trgm')",
        )
        .fetch_one(&self.pool)
        .await
        .unwrap_or(false);

        let strategy = if has_trgm {
            NameMatch::Similarity
        } else {
            NameMatch::Substring
        };
        tracing::info!(strategy = strategy.as_str(), "Name match strategy selected");
        strategy
    }

    /// Lightweight connectivity probe for the health endpoint
    pub async fn ping(&self) -> Result<(), PostgresError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("PostgreSQL pool closed");
    }

    /// Start a background health check task
    pub fn start_health_check_task(
        self: &Arc<Self>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let db = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(DB_HEALTH_CHECK_INTERVAL_SECS));
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            tracing::debug!("PostgreSQL health check task shutting down");
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        if let Err(e) = db.ping().await {
                            tracing::warn!("PostgreSQL health check failed: {}", e);
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    // PostgreSQL tests require a running PostgreSQL instance
    // and are typically run as integration tests
}
