//! Shared data types for the company store

/// One company record, as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyRow {
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

/// Per-country record count (stats aggregate)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// Per-size-bucket record count (stats aggregate)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SizeCount {
    pub size: String,
    pub count: i64,
}

/// Aggregate statistics over the full store
#[derive(Debug, Clone)]
pub struct StatsResult {
    pub total_companies: i64,
    pub top_countries: Vec<CountryCount>,
    pub company_sizes: Vec<SizeCount>,
}
