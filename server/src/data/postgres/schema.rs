//! PostgreSQL schema definitions
//!
//! The `companies` table is owned by the ingestion pipeline in production;
//! the migration runner creates it idempotently for development and test
//! databases, along with the indexes the query layer relies on.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Normalized website-domain expression
///
/// Must stay textually identical to the expression indexed by
/// `idx_companies_domain` below, or the planner will not use the index.
pub const WEBSITE_DOMAIN_EXPR: &str =
    r"lower(regexp_replace(website, '^(https?://)?(www\.)?', ''))";

/// Complete schema SQL for PostgreSQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at BIGINT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at BIGINT NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success BOOLEAN NOT NULL DEFAULT TRUE
);

-- =============================================================================
-- Companies (read-only from the API's perspective)
-- =============================================================================
CREATE TABLE IF NOT EXISTS companies (
    id BIGSERIAL PRIMARY KEY,
    company_id TEXT NOT NULL,
    name TEXT,
    website TEXT,
    country TEXT,
    locality TEXT,
    region TEXT,
    industry TEXT,
    size TEXT,
    founded TEXT,
    linkedin_url TEXT
);

-- Left-anchored prefix lookup on the normalized domain
CREATE INDEX IF NOT EXISTS idx_companies_domain
    ON companies ((lower(regexp_replace(website, '^(https?://)?(www\.)?', ''))) text_pattern_ops);

-- Search filter and aggregate support
CREATE INDEX IF NOT EXISTS idx_companies_country ON companies (LOWER(country));
CREATE INDEX IF NOT EXISTS idx_companies_size ON companies (size);
"#;

/// Best-effort trigram setup: requires the pg_trgm extension
///
/// Creating the extension needs elevated privileges on managed databases;
/// failure here only disables similarity ranking (the capability probe
/// selects the substring fallback), it never fails startup.
pub const TRGM_EXTENSION: &str = "CREATE EXTENSION IF NOT EXISTS pg_trgm";

pub const TRGM_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_companies_name_trgm ON companies USING gin (name gin_trgm_ops)";
