//! Company repository for PostgreSQL read operations

use sqlx::PgPool;

use crate::data::postgres::PostgresError;
use crate::data::postgres::filters::{NameMatch, SearchFilters, build_search_query, prefix_pattern};
use crate::data::postgres::schema::WEBSITE_DOMAIN_EXPR;
use crate::data::types::CompanyRow;

const COMPANY_COLUMNS: &str =
    "id, country, founded, company_id, industry, linkedin_url, locality, name, region, size, website";

/// Look up a company by its normalized website domain
///
/// `domain` must already be normalized (lowercase, protocol/www/path
/// stripped). The stored website is normalized by the indexed expression and
/// matched as a left-anchored prefix, so stored URLs that retain a path
/// still match. When duplicates share a domain the lowest id wins.
pub async fn get_by_domain(
    pool: &PgPool,
    domain: &str,
) -> Result<Option<CompanyRow>, PostgresError> {
    let sql = format!(
        "SELECT {} FROM companies WHERE {} LIKE $1 ORDER BY id ASC LIMIT 1",
        COMPANY_COLUMNS, WEBSITE_DOMAIN_EXPR
    );

    let row = sqlx::query_as::<_, CompanyRow>(&sql)
        .bind(prefix_pattern(domain))
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Search companies with optional filters and pagination
///
/// Returns the requested page plus the total number of matching rows,
/// computed by a separate COUNT over the identical predicate set so the
/// total is independent of limit/offset.
pub async fn search(
    pool: &PgPool,
    filters: &SearchFilters,
    name_match: NameMatch,
    limit: i64,
    offset: i64,
) -> Result<(Vec<CompanyRow>, i64), PostgresError> {
    let query = build_search_query(filters, name_match);

    let page_sql = format!(
        "SELECT {} FROM companies WHERE {} ORDER BY {} LIMIT ${} OFFSET ${}",
        COMPANY_COLUMNS,
        query.where_clause,
        query.order_by,
        query.params.len() + 1,
        query.params.len() + 2,
    );
    let count_sql = format!(
        "SELECT COUNT(*) FROM companies WHERE {}",
        query.where_clause
    );

    let mut page_query = sqlx::query_as::<_, CompanyRow>(&page_sql);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for param in &query.params {
        page_query = page_query.bind(param);
        count_query = count_query.bind(param);
    }

    let rows = page_query.bind(limit).bind(offset).fetch_all(pool).await?;
    let total = count_query.fetch_one(pool).await?;

    Ok((rows, total))
}

#[cfg(test)]
mod tests {
    // Repository queries require a running PostgreSQL instance and are
    // exercised by integration tests; SQL construction is covered by the
    // filters module tests.
}
