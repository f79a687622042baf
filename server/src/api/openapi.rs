//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{companies, health, root, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Firmbase API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Read-only API for company records: domain lookup, filtered search, statistics"
    ),
    tags(
        (name = "health", description = "Health and service info"),
        (name = "companies", description = "Company lookup and search"),
        (name = "stats", description = "Store statistics")
    ),
    paths(
        root::service_info,
        health::health,
        companies::get_company_by_domain,
        companies::search_companies,
        stats::get_stats,
    ),
    components(schemas(
        health::HealthResponse,
        companies::types::CompanyDto,
        companies::types::CompanyResponse,
        companies::types::CompaniesListResponse,
        stats::CountryCountDto,
        stats::SizeCountDto,
        stats::StatsResponse,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Firmbase API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
