//! Shared API types
//!
//! Error envelope used by every endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::data::StoreError;
use crate::domain::FilterError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    UnprocessableEntity { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unprocessable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnprocessableEntity {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Explicit filter parameters: every rejection is a bad request
    pub fn from_filter_params(e: FilterError) -> Self {
        Self::bad_request(e.code(), e.to_string())
    }

    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::AlreadyExists { .. } => {
                Self::conflict("STRING_EXISTS", "String already exists in the system")
            }
            other => {
                tracing::error!(error = %other, "String store error");
                Self::internal("Storage operation failed")
            }
        }
    }
}

/// Natural-language translation: contradictions are 422, misunderstandings 400
impl From<FilterError> for ApiError {
    fn from(e: FilterError) -> Self {
        if e.is_validation() {
            Self::unprocessable(e.code(), e.to_string())
        } else {
            Self::bad_request(e.code(), e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Conflict { code, message } => (StatusCode::CONFLICT, "conflict", code, message),
            Self::UnprocessableEntity { code, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable_entity",
                code,
                message,
            ),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_status() {
        let resp = ApiError::from(FilterError::NoMatch).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::from(FilterError::InvalidQuery("empty".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::from(FilterError::ConflictingBounds {
            min_length: 10,
            max_length: 5,
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_filter_params_always_bad_request() {
        let err = ApiError::from_filter_params(FilterError::NegativeValue {
            field: "min_length",
            value: -1,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_status() {
        let exists = ApiError::from_store(StoreError::AlreadyExists { id: "abc".into() });
        assert_eq!(exists.into_response().status(), StatusCode::CONFLICT);

        let io = ApiError::from_store(std::io::Error::other("disk full").into());
        assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let resp = ApiError::not_found("STRING_NOT_FOUND", "missing").into_response();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["code"], "STRING_NOT_FOUND");
        assert_eq!(json["message"], "missing");
    }
}
