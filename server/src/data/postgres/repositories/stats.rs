//! Stats repository for store-wide aggregations

use sqlx::PgPool;

use crate::core::constants::STATS_TOP_COUNTRIES;
use crate::data::postgres::PostgresError;
use crate::data::types::{CountryCount, SizeCount};

/// Total number of company records
pub async fn total_companies(pool: &PgPool) -> Result<i64, PostgresError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Top countries by record count
///
/// Ties break by country name ascending so the ordering is deterministic.
pub async fn top_countries(pool: &PgPool) -> Result<Vec<CountryCount>, PostgresError> {
    let rows = sqlx::query_as::<_, CountryCount>(
        r#"
        SELECT country, COUNT(*) as count
        FROM companies
        WHERE country IS NOT NULL
        GROUP BY country
        ORDER BY count DESC, country ASC
        LIMIT $1
        "#,
    )
    .bind(STATS_TOP_COUNTRIES)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Record counts per size bucket
///
/// Returned unordered; the lookup service applies the canonical bucket
/// ordering (size buckets are a small closed set).
pub async fn size_counts(pool: &PgPool) -> Result<Vec<SizeCount>, PostgresError> {
    let rows = sqlx::query_as::<_, SizeCount>(
        r#"
        SELECT size, COUNT(*) as count
        FROM companies
        WHERE size IS NOT NULL
        GROUP BY size
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
