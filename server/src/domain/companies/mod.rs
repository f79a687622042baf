//! Company lookup service
//!
//! Read-only operations over the company store: exact domain lookup,
//! filtered search with pagination, and aggregate statistics. The name-match
//! strategy is probed once at startup and held here, so request handling
//! never re-branches on store capabilities.

pub mod domain_key;

use std::sync::Arc;

use thiserror::Error;

use crate::data::postgres::repositories::{company, stats};
use crate::data::{
    CompanyRow, NameMatch, PostgresError, PostgresService, SearchFilters, StatsResult,
};

/// Canonical ordering for the closed set of size buckets
const SIZE_BUCKET_ORDER: &[&str] = &[
    "1-10",
    "11-50",
    "51-200",
    "201-500",
    "501-1000",
    "1001-5000",
    "5001-10000",
    "10001+",
];

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid domain")]
    InvalidDomain,

    #[error(transparent)]
    Store(#[from] PostgresError),
}

/// Company lookup service
pub struct CompanyService {
    database: Arc<PostgresService>,
    name_match: NameMatch,
}

impl CompanyService {
    /// Initialize the service, probing the store for trigram support
    pub async fn init(database: Arc<PostgresService>) -> Self {
        let name_match = database.detect_name_match().await;
        Self {
            database,
            name_match,
        }
    }

    pub fn name_match(&self) -> NameMatch {
        self.name_match
    }

    /// Look up a company by website domain (case-insensitive exact match)
    ///
    /// The input is normalized first; an input that normalizes to nothing
    /// is rejected. Returns `Ok(None)` when no record matches.
    pub async fn get_by_domain(&self, raw_domain: &str) -> Result<Option<CompanyRow>, LookupError> {
        let domain = domain_key::extract_domain(raw_domain);
        if domain.is_empty() {
            return Err(LookupError::InvalidDomain);
        }

        let row = company::get_by_domain(self.database.pool(), &domain).await?;
        Ok(row)
    }

    /// Filtered, paginated search; returns the page and the total match count
    ///
    /// `limit`/`offset` are validated at the transport boundary and arrive
    /// here in range.
    pub async fn search(
        &self,
        filters: &SearchFilters,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<CompanyRow>, i64), PostgresError> {
        company::search(
            self.database.pool(),
            filters,
            self.name_match,
            i64::from(limit),
            i64::from(offset),
        )
        .await
    }

    /// Aggregate statistics over the full store
    pub async fn stats(&self) -> Result<StatsResult, PostgresError> {
        let pool = self.database.pool();

        let (total_companies, top_countries, mut company_sizes) = tokio::try_join!(
            stats::total_companies(pool),
            stats::top_countries(pool),
            stats::size_counts(pool),
        )?;

        // Size buckets are a small closed set: order canonically, not by count
        company_sizes.sort_by(|a, b| size_bucket_rank(&a.size).cmp(&size_bucket_rank(&b.size)));

        Ok(StatsResult {
            total_companies,
            top_countries,
            company_sizes,
        })
    }
}

/// Sort key for a size bucket: canonical position, then (for unknown
/// buckets) the label itself so they trail in alphabetical order.
fn size_bucket_rank(size: &str) -> (usize, &str) {
    match SIZE_BUCKET_ORDER.iter().position(|b| *b == size) {
        Some(i) => (i, ""),
        None => (SIZE_BUCKET_ORDER.len(), size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SizeCount;

    fn counts(sizes: &[&str]) -> Vec<SizeCount> {
        sizes
            .iter()
            .map(|s| SizeCount {
                size: s.to_string(),
                count: 1,
            })
            .collect()
    }

    #[test]
    fn size_buckets_sort_canonically() {
        let mut sizes = counts(&["51-200", "1-10", "10001+", "11-50"]);
        sizes.sort_by(|a, b| size_bucket_rank(&a.size).cmp(&size_bucket_rank(&b.size)));
        let order: Vec<&str> = sizes.iter().map(|s| s.size.as_str()).collect();
        assert_eq!(order, vec!["1-10", "11-50", "51-200", "10001+"]);
    }

    #[test]
    fn unknown_buckets_trail_alphabetically() {
        let mut sizes = counts(&["zz-custom", "1-10", "aa-custom", "10001+"]);
        sizes.sort_by(|a, b| size_bucket_rank(&a.size).cmp(&size_bucket_rank(&b.size)));
        let order: Vec<&str> = sizes.iter().map(|s| s.size.as_str()).collect();
        assert_eq!(order, vec!["1-10", "10001+", "aa-custom", "zz-custom"]);
    }

    #[test]
    fn every_canonical_bucket_has_a_rank() {
        for (i, bucket) in SIZE_BUCKET_ORDER.iter().enumerate() {
            assert_eq!(size_bucket_rank(bucket), (i, ""));
        }
    }
}
