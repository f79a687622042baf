//! Store statistics endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::types::ApiError;
use crate::data::{CountryCount, SizeCount};
use crate::domain::CompanyService;

/// Shared state for the stats endpoint
#[derive(Clone)]
pub struct StatsApiState {
    pub companies: Arc<CompanyService>,
}

/// Build stats routes
pub fn routes(companies: Arc<CompanyService>) -> Router<()> {
    let state = StatsApiState { companies };

    Router::new().route("/stats", get(get_stats)).with_state(state)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountryCountDto {
    pub country: String,
    pub count: i64,
}

impl From<CountryCount> for CountryCountDto {
    fn from(row: CountryCount) -> Self {
        Self {
            country: row.country,
            count: row.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SizeCountDto {
    pub size: String,
    pub count: i64,
}

impl From<SizeCount> for SizeCountDto {
    fn from(row: SizeCount) -> Self {
        Self {
            size: row.size,
            count: row.count,
        }
    }
}

/// Aggregate statistics response
///
/// `top_countries` is ordered by count descending (ties by name);
/// `company_sizes` follows the canonical size-bucket ordering.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub total_companies: i64,
    pub top_countries: Vec<CountryCountDto>,
    pub company_sizes: Vec<SizeCountDto>,
}

/// Get database statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Store statistics", body = StatsResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_stats(
    State(state): State<StatsApiState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state
        .companies
        .stats()
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(StatsResponse {
        success: true,
        total_companies: stats.total_companies,
        top_countries: stats
            .top_countries
            .into_iter()
            .map(CountryCountDto::from)
            .collect(),
        company_sizes: stats
            .company_sizes
            .into_iter()
            .map(SizeCountDto::from)
            .collect(),
    }))
}
