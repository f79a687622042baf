//! Request/response types for company endpoints

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::constants::SEARCH_DEFAULT_LIMIT;
use crate::data::CompanyRow;

/// One company record as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyDto {
    pub id: i64,
    pub country: Option<String>,
    pub founded: Option<String>,
    pub company_id: String,
    pub industry: Option<String>,
    pub linkedin_url: Option<String>,
    pub locality: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub size: Option<String>,
    pub website: Option<String>,
}

impl From<CompanyRow> for CompanyDto {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            country: row.country,
            founded: row.founded,
            company_id: row.company_id,
            industry: row.industry,
            linkedin_url: row.linkedin_url,
            locality: row.locality,
            name: row.name,
            region: row.region,
            size: row.size,
            website: row.website,
        }
    }
}

/// Single-company response envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyResponse {
    pub success: bool,
    pub data: Option<CompanyDto>,
    pub message: Option<String>,
}

/// Paginated company list response
///
/// `count` is the total number of records matching the filter set,
/// independent of the page bounds.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompaniesListResponse {
    pub success: bool,
    pub data: Vec<CompanyDto>,
    pub count: i64,
    pub message: Option<String>,
}

/// Query parameters for company search
///
/// Out-of-range `limit`/`offset` values are rejected with 400, never
/// clamped.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct SearchQueryParams {
    /// Filter by country (case-insensitive exact match)
    pub country: Option<String>,
    /// Search by company name (similarity-ranked when available)
    pub name: Option<String>,
    /// Filter by industry (case-insensitive substring match)
    pub industry: Option<String>,
    /// Number of results to return (1-100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: u32,
    /// Offset for pagination
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    SEARCH_DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: u32, offset: u32) -> SearchQueryParams {
        SearchQueryParams {
            country: None,
            name: None,
            industry: None,
            limit,
            offset,
        }
    }

    #[test]
    fn limit_boundaries() {
        assert!(params(1, 0).validate().is_ok());
        assert!(params(100, 0).validate().is_ok());
        assert!(params(0, 0).validate().is_err());
        assert!(params(101, 0).validate().is_err());
    }

    #[test]
    fn any_offset_is_valid() {
        assert!(params(10, 0).validate().is_ok());
        assert!(params(10, u32::MAX).validate().is_ok());
    }

    #[test]
    fn default_limit_is_in_range() {
        let p: SearchQueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset, 0);
        assert!(p.validate().is_ok());
    }
}
