//! Company API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedQuery;
use crate::api::types::ApiError;
use crate::data::SearchFilters;
use crate::domain::CompanyService;

use types::{CompaniesListResponse, CompanyDto, CompanyResponse, SearchQueryParams};

/// Shared state for company API endpoints
#[derive(Clone)]
pub struct CompaniesApiState {
    pub companies: Arc<CompanyService>,
}

/// Build company API routes
pub fn routes(companies: Arc<CompanyService>) -> Router<()> {
    let state = CompaniesApiState { companies };

    Router::new()
        .route("/company/domain/{domain}", get(get_company_by_domain))
        .route("/companies/search", get(search_companies))
        .with_state(state)
}

/// Get company information by website domain
#[utoipa::path(
    get,
    path = "/company/domain/{domain}",
    tag = "companies",
    params(
        ("domain" = String, Path, description = "Website domain, e.g. example.com")
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 400, description = "Invalid domain"),
        (status = 404, description = "No company for this domain")
    )
)]
pub async fn get_company_by_domain(
    State(state): State<CompaniesApiState>,
    Path(domain): Path<String>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = state
        .companies
        .get_by_domain(&domain)
        .await
        .map_err(ApiError::from_lookup)?
        .ok_or_else(|| ApiError::not_found("Company not found"))?;

    Ok(Json(CompanyResponse {
        success: true,
        data: Some(CompanyDto::from(company)),
        message: Some("Company found".to_string()),
    }))
}

/// Search companies with filters
#[utoipa::path(
    get,
    path = "/companies/search",
    tag = "companies",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Matching companies", body = CompaniesListResponse),
        (status = 400, description = "Invalid limit or offset")
    )
)]
pub async fn search_companies(
    State(state): State<CompaniesApiState>,
    ValidatedQuery(params): ValidatedQuery<SearchQueryParams>,
) -> Result<Json<CompaniesListResponse>, ApiError> {
    let filters = SearchFilters {
        country: params.country,
        name: params.name,
        industry: params.industry,
    };

    let (rows, total) = state
        .companies
        .search(&filters, params.limit, params.offset)
        .await
        .map_err(ApiError::from_postgres)?;

    let data: Vec<CompanyDto> = rows.into_iter().map(CompanyDto::from).collect();

    Ok(Json(CompaniesListResponse {
        success: true,
        data,
        count: total,
        message: Some(format!("Found {} companies", total)),
    }))
}
