//! PostgreSQL error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostgresError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration {version} ({name}) failed: {error}")]
    MigrationFailed {
        version: i32,
        name: String,
        error: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PostgresError {
    /// Whether this error means the store is temporarily unreachable
    /// (pool exhausted, connection refused) rather than broken.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_failed_error_display() {
        let err = PostgresError::MigrationFailed {
            version: 2,
            name: "add_name_index".to_string(),
            error: "syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Migration 2 (add_name_index) failed: syntax error"
        );
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = PostgresError::Database(sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_config_error_is_not_unavailable() {
        let err = PostgresError::Config("missing URL".to_string());
        assert!(!err.is_unavailable());
    }
}
