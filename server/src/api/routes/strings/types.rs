//! String API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AnalyzedString, FilterSet, ParseResult};

/// Request body for storing a string (documentation only, see `StringValueBody`)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStringRequest {
    pub value: String,
}

/// Query params for the natural-language filter endpoint
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}

/// Response for `GET /strings`
#[derive(Debug, Serialize, ToSchema)]
pub struct ListStringsResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Response for `GET /strings/filter-by-natural-language`
#[derive(Debug, Serialize, ToSchema)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: ParseResult,
}
