//! OpenAPI specification

use axum::http::header;
use axum::response::{IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{health, strings};
use crate::domain::{AnalyzedString, FilterSet, ParseResult, StringProperties};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "String Analyzer API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Analyze strings and filter them with plain-English queries"
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "strings", description = "String analysis and filtering")
    ),
    paths(
        health::health,
        health::welcome,
        strings::create_string,
        strings::list_strings,
        strings::filter_by_natural_language,
        strings::get_string,
        strings::delete_string,
    ),
    components(schemas(
        health::HealthResponse,
        health::WelcomeResponse,
        AnalyzedString,
        StringProperties,
        FilterSet,
        ParseResult,
        strings::types::CreateStringRequest,
        strings::types::ListStringsResponse,
        strings::types::NaturalLanguageResponse,
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
