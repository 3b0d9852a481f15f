//! HTTP error type for the storefront API.
//!
//! Handlers return `Result<T, ApiError>`; the error renders as
//! `{ "error": "..." }` with a non-2xx status. Upstream and internal failures
//! are logged in full and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::DomainError;

/// Client-facing text for every failure whose detail stays in the logs.
pub const GENERIC_FAILURE: &str = "Failed to process request";

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required credential is missing; no upstream call was made.
    #[error("not configured: {0}")]
    NotConfigured(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    /// The completion API failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured(_) | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Configuration(m) => ApiError::NotConfigured(m),
            DomainError::NotFound(m) => ApiError::NotFound(m),
            DomainError::InvalidInput(m) => ApiError::BadRequest(m),
            DomainError::Upstream(m) => ApiError::Upstream(m),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let client_message = match self {
            ApiError::NotConfigured(m) | ApiError::NotFound(m) | ApiError::BadRequest(m) => m,
            ApiError::Upstream(m) => {
                error!(error = %m, "completion API error");
                GENERIC_FAILURE.to_owned()
            }
            ApiError::Internal(m) => {
                error!(error = %m, "internal server error");
                GENERIC_FAILURE.to_owned()
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let cases = [
            (DomainError::configuration("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::not_found("x"), StatusCode::NOT_FOUND),
            (DomainError::invalid_input("x"), StatusCode::BAD_REQUEST),
            (DomainError::upstream("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::storage("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status(), status);
        }
    }

    #[test]
    fn upstream_detail_is_not_exposed() {
        let response = ApiError::Upstream("quota exceeded for key AIza...".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
