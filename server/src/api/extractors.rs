//! Request extractors with structured rejections

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// Validated `{string_value}` path segment.
///
/// Percent-decoded by axum, so values with spaces or unicode round-trip.
#[derive(Debug)]
pub struct StringValuePath(pub String);

impl<S> FromRequestParts<S> for StringValuePath
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Path)?;
        Ok(Self(value))
    }
}

/// Body of `POST /strings`: a JSON object whose `value` field is a string.
///
/// A missing `value` is a bad request; a `value` of any other JSON type is
/// unprocessable.
#[derive(Debug)]
pub struct StringValueBody(pub String);

impl<S> FromRequest<S> for StringValueBody
where
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;

        match body.get("value") {
            None | Some(serde_json::Value::Null) => Err(ValidationRejection::MissingField("value")),
            Some(serde_json::Value::String(value)) => Ok(Self(value.clone())),
            Some(_) => Err(ValidationRejection::InvalidFieldType {
                field: "value",
                expected: "string",
            }),
        }
    }
}

/// Validation rejection with structured error response
#[derive(Debug)]
pub enum ValidationRejection {
    /// Failed to parse path parameters
    Path(PathRejection),
    /// Failed to parse query string
    Query(QueryRejection),
    /// Failed to parse JSON body
    Json(JsonRejection),
    /// Required body field absent
    MissingField(&'static str),
    /// Body field present with the wrong JSON type
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::Path(rejection) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "PATH_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::Query(rejection) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "QUERY_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "JSON_PARSE_ERROR",
                rejection.body_text(),
            ),
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "MISSING_FIELD",
                format!("Missing \"{}\" field", field),
            ),
            Self::InvalidFieldType { field, expected } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable_entity",
                "INVALID_FIELD_TYPE",
                format!("\"{}\" must be a {}", field, expected),
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

/// Query extractor for types that validate themselves after extraction.
///
/// Parse failures (wrong types, malformed numbers) reject with `QUERY_PARSE_ERROR`.
#[derive(Debug)]
pub struct ParsedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ParsedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;
        Ok(Self(value))
    }
}
