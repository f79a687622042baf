use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT, ENV_API_TOKEN, ENV_DATABASE_URL,
    ENV_DATABASE_URL_FALLBACK, POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS,
    POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS, POSTGRES_DEFAULT_MAX_CONNECTIONS,
    POSTGRES_DEFAULT_MAX_LIFETIME_SECS, POSTGRES_DEFAULT_MIN_CONNECTIONS,
    POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS,
};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Authentication configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AuthFileConfig {
    /// Static API bearer token (or use FIRMBASE_API_TOKEN env var)
    pub token: Option<String>,
}

/// PostgreSQL configuration section (from JSON config file)
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PostgresFileConfig {
    /// PostgreSQL connection URL (or use FIRMBASE_DATABASE_URL env var)
    pub url: Option<String>,
    /// Maximum number of connections in the pool (default: 20)
    pub max_connections: Option<u32>,
    /// Minimum number of connections to keep warm (default: 2)
    pub min_connections: Option<u32>,
    /// Connection acquire timeout in seconds (default: 30)
    pub acquire_timeout_secs: Option<u64>,
    /// Idle connection timeout in seconds (default: 600)
    pub idle_timeout_secs: Option<u64>,
    /// Max connection lifetime in seconds (default: 1800)
    pub max_lifetime_secs: Option<u64>,
    /// Statement timeout in seconds, 0 to disable (default: 60)
    pub statement_timeout_secs: Option<u64>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub auth: Option<AuthFileConfig>,
    pub database: Option<PostgresFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Resolved Config
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Static API bearer token, compared on every protected request
    pub token: String,
}

/// PostgreSQL configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub statement_timeout_secs: u64,
}

/// Fully resolved application configuration
///
/// Precedence: defaults < config file < environment < CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database: PostgresConfig,
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = Self::load_file_config(cli)?;

        let server = ServerConfig {
            host: cli
                .host
                .clone()
                .or_else(|| file.server.as_ref().and_then(|s| s.host.clone()))
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli
                .port
                .or_else(|| file.server.as_ref().and_then(|s| s.port))
                .unwrap_or(DEFAULT_PORT),
        };

        let token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| file.auth.as_ref().and_then(|a| a.token.clone()))
            .filter(|t| !t.is_empty());
        let Some(token) = token else {
            bail!(
                "API token is required: set {} or auth.token in {}",
                ENV_API_TOKEN,
                CONFIG_FILE_NAME
            );
        };

        let db_file = file.database.unwrap_or_default();
        let url = cli
            .database_url
            .clone()
            .or(db_file.url)
            .or_else(|| std::env::var(ENV_DATABASE_URL_FALLBACK).ok())
            .filter(|u| !u.is_empty());
        let Some(url) = url else {
            bail!(
                "Database URL is required: set {} (or {}), database.url in {}, or --database-url",
                ENV_DATABASE_URL,
                ENV_DATABASE_URL_FALLBACK,
                CONFIG_FILE_NAME
            );
        };

        let database = PostgresConfig {
            url,
            max_connections: db_file
                .max_connections
                .unwrap_or(POSTGRES_DEFAULT_MAX_CONNECTIONS),
            min_connections: db_file
                .min_connections
                .unwrap_or(POSTGRES_DEFAULT_MIN_CONNECTIONS),
            acquire_timeout_secs: db_file
                .acquire_timeout_secs
                .unwrap_or(POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout_secs: db_file
                .idle_timeout_secs
                .unwrap_or(POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS),
            max_lifetime_secs: db_file
                .max_lifetime_secs
                .unwrap_or(POSTGRES_DEFAULT_MAX_LIFETIME_SECS),
            statement_timeout_secs: db_file
                .statement_timeout_secs
                .unwrap_or(POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS),
        };

        Ok(Self {
            server,
            auth: AuthConfig { token },
            database,
        })
    }

    /// Resolve and load the file config, if any
    ///
    /// Uses the CLI-provided path when given (error if missing), otherwise
    /// falls back to ./firmbase.json when present.
    fn load_file_config(cli: &CliConfig) -> Result<FileConfig> {
        if let Some(path) = &cli.config {
            let config = FileConfig::load_from_file(path)?;
            config.warn_unknown_fields();
            return Ok(config);
        }

        let default_path = Path::new(CONFIG_FILE_NAME);
        if default_path.exists() {
            let config = FileConfig::load_from_file(default_path)?;
            config.warn_unknown_fields();
            return Ok(config);
        }

        Ok(FileConfig::default())
    }
}

/// Whether the host binds all interfaces
pub fn is_all_interfaces(host: &str) -> bool {
    host == "0.0.0.0" || host == "::" || host == "[::]"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn file_config_parses_all_sections() {
        let f = write_config(
            r#"{
                "server": {"host": "0.0.0.0", "port": 9000},
                "auth": {"token": "secret"},
                "database": {"url": "postgres://localhost/companies", "max_connections": 5}
            }"#,
        );
        let config = FileConfig::load_from_file(f.path()).unwrap();
        assert_eq!(config.server.as_ref().unwrap().host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.server.as_ref().unwrap().port, Some(9000));
        assert_eq!(config.auth.as_ref().unwrap().token.as_deref(), Some("secret"));
        let db = config.database.as_ref().unwrap();
        assert_eq!(db.url.as_deref(), Some("postgres://localhost/companies"));
        assert_eq!(db.max_connections, Some(5));
        assert_eq!(db.min_connections, None);
    }

    #[test]
    fn cli_overrides_file() {
        let f = write_config(
            r#"{
                "server": {"host": "10.0.0.1", "port": 9000},
                "auth": {"token": "secret"},
                "database": {"url": "postgres://file/db"}
            }"#,
        );
        let cli = CliConfig {
            host: Some("127.0.0.1".to_string()),
            port: None,
            config: Some(f.path().to_path_buf()),
            database_url: Some("postgres://cli/db".to_string()),
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.url, "postgres://cli/db");
    }

    #[test]
    fn missing_token_fails() {
        let f = write_config(r#"{"database": {"url": "postgres://file/db"}}"#);
        let cli = CliConfig {
            config: Some(f.path().to_path_buf()),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("API token"));
    }

    #[test]
    fn missing_database_url_fails() {
        let f = write_config(r#"{"auth": {"token": "secret"}}"#);
        let cli = CliConfig {
            config: Some(f.path().to_path_buf()),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Database URL"));
    }

    #[test]
    fn pool_defaults_applied() {
        let f = write_config(
            r#"{"auth": {"token": "secret"}, "database": {"url": "postgres://file/db"}}"#,
        );
        let cli = CliConfig {
            config: Some(f.path().to_path_buf()),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 2);
        assert_eq!(config.database.acquire_timeout_secs, 30);
        assert_eq!(config.database.statement_timeout_secs, 60);
    }

    #[test]
    fn all_interfaces_detection() {
        assert!(is_all_interfaces("0.0.0.0"));
        assert!(is_all_interfaces("::"));
        assert!(!is_all_interfaces("127.0.0.1"));
    }
}
