// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "Firmbase";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "firmbase";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "firmbase.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "FIRMBASE_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "FIRMBASE_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "FIRMBASE_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "FIRMBASE_LOG";

// =============================================================================
// Environment Variables - Database
// =============================================================================

/// Environment variable for the PostgreSQL connection URL
pub const ENV_DATABASE_URL: &str = "FIRMBASE_DATABASE_URL";

/// Fallback connection URL env var (sqlx convention)
pub const ENV_DATABASE_URL_FALLBACK: &str = "DATABASE_URL";

// =============================================================================
// Environment Variables - Authentication
// =============================================================================

/// Environment variable for the static API bearer token
pub const ENV_API_TOKEN: &str = "FIRMBASE_API_TOKEN";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

// =============================================================================
// PostgreSQL Pool Defaults
// =============================================================================

/// Maximum connections in the pool
pub const POSTGRES_DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Minimum connections kept warm
pub const POSTGRES_DEFAULT_MIN_CONNECTIONS: u32 = 2;

/// Connection acquire timeout in seconds (pool exhaustion bound)
pub const POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Idle connection timeout in seconds
pub const POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;

/// Max connection lifetime in seconds
pub const POSTGRES_DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

/// Statement timeout in seconds (aborts runaway queries server-side)
pub const POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 60;

/// Interval between background pool health probes
pub const DB_HEALTH_CHECK_INTERVAL_SECS: u64 = 60;

// =============================================================================
// Query Limits
// =============================================================================

/// Default page size for company search
pub const SEARCH_DEFAULT_LIMIT: u32 = 10;

/// Number of countries returned by the stats endpoint
pub const STATS_TOP_COUNTRIES: i64 = 10;

// =============================================================================
// Shutdown
// =============================================================================

/// Seconds to wait for background tasks during graceful shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
