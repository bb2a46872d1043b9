//! String analysis API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use types::{ListStringsResponse, NaturalLanguageQuery, NaturalLanguageResponse};

use crate::api::extractors::{ParsedQuery, StringValueBody, StringValuePath};
use crate::api::types::ApiError;
use crate::data::StringStore;
use crate::domain::strings::translate;
use crate::domain::{AnalyzedString, RawFilters};

/// Shared state for String API endpoints
#[derive(Clone)]
pub struct StringsApiState {
    pub store: Arc<StringStore>,
}

/// Build String API routes
pub fn routes(store: Arc<StringStore>) -> Router<()> {
    let state = StringsApiState { store };

    Router::new()
        .route("/", get(list_strings).post(create_string))
        .route("/filter-by-natural-language", get(filter_by_natural_language))
        .route("/{string_value}", get(get_string).delete(delete_string))
        .with_state(state)
}

/// Order records by `created_at`, newest first; later inserts win ties
fn newest_first(mut data: Vec<AnalyzedString>) -> Vec<AnalyzedString> {
    data.reverse();
    data.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    data
}

/// Analyze and store a string
#[utoipa::path(
    post,
    path = "/strings",
    tag = "strings",
    request_body = types::CreateStringRequest,
    responses(
        (status = 201, description = "String analyzed and stored", body = AnalyzedString),
        (status = 400, description = "Invalid JSON or missing \"value\" field"),
        (status = 409, description = "String already exists"),
        (status = 422, description = "\"value\" is not a string")
    )
)]
pub async fn create_string(
    State(state): State<StringsApiState>,
    StringValueBody(value): StringValueBody,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let record = state
        .store
        .insert(AnalyzedString::new(value))
        .await
        .map_err(ApiError::from_store)?;

    tracing::debug!(id = %record.id, length = record.properties.length, "String created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// List stored strings, optionally filtered
#[utoipa::path(
    get,
    path = "/strings",
    tag = "strings",
    params(RawFilters),
    responses(
        (status = 200, description = "Matching strings, newest first", body = ListStringsResponse),
        (status = 400, description = "Invalid query parameter values or types")
    )
)]
pub async fn list_strings(
    State(state): State<StringsApiState>,
    ParsedQuery(raw): ParsedQuery<RawFilters>,
) -> Result<Json<ListStringsResponse>, ApiError> {
    let filters = raw.validate().map_err(ApiError::from_filter_params)?;
    let data = newest_first(state.store.filter(&filters).await);

    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// Filter stored strings with a plain-English query
#[utoipa::path(
    get,
    path = "/strings/filter-by-natural-language",
    tag = "strings",
    params(
        ("query" = String, Query, description = "Plain-English filter, e.g. \"all single word palindromic strings\"")
    ),
    responses(
        (status = 200, description = "Matching strings and the filters they were selected by", body = NaturalLanguageResponse),
        (status = 400, description = "Missing query or no recognizable filter"),
        (status = 422, description = "Query parsed into conflicting filters")
    )
)]
pub async fn filter_by_natural_language(
    State(state): State<StringsApiState>,
    ParsedQuery(params): ParsedQuery<NaturalLanguageQuery>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Some(query) = params.query else {
        return Err(ApiError::bad_request(
            "MISSING_QUERY",
            "Query parameter \"query\" is required",
        ));
    };

    let interpreted = translate(&query)?;
    let data = newest_first(state.store.filter(&interpreted.parsed_filters).await);

    tracing::debug!(
        query = %query,
        filters = ?interpreted.parsed_filters,
        count = data.len(),
        "Natural language filter applied"
    );

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: interpreted,
    }))
}

/// Get a stored string by its value
#[utoipa::path(
    get,
    path = "/strings/{string_value}",
    tag = "strings",
    params(
        ("string_value" = String, Path, description = "The exact stored string, URL encoded")
    ),
    responses(
        (status = 200, description = "String details", body = AnalyzedString),
        (status = 404, description = "String not found")
    )
)]
pub async fn get_string(
    State(state): State<StringsApiState>,
    StringValuePath(value): StringValuePath,
) -> Result<Json<AnalyzedString>, ApiError> {
    state
        .store
        .find_by_value(&value)
        .await
        .map(Json)
        .ok_or_else(string_not_found)
}

/// Delete a stored string by its value
#[utoipa::path(
    delete,
    path = "/strings/{string_value}",
    tag = "strings",
    params(
        ("string_value" = String, Path, description = "The exact stored string, URL encoded")
    ),
    responses(
        (status = 204, description = "String deleted"),
        (status = 404, description = "String not found")
    )
)]
pub async fn delete_string(
    State(state): State<StringsApiState>,
    StringValuePath(value): StringValuePath,
) -> Result<StatusCode, ApiError> {
    match state
        .store
        .remove_by_value(&value)
        .await
        .map_err(ApiError::from_store)?
    {
        Some(removed) => {
            tracing::debug!(id = %removed.id, "String deleted via API");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(string_not_found()),
    }
}

fn string_not_found() -> ApiError {
    ApiError::not_found("STRING_NOT_FOUND", "String does not exist in the system")
}
