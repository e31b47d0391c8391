use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use movierate_core::catalog::{catalog_error_to_status_code, CatalogError};

/// Errors returned by the API handlers.
///
/// Every variant renders as `{"detail": "<message>"}` with the matching status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The request body could not be parsed as the expected JSON payload.
    #[error("{0}")]
    Json(#[from] JsonRejection),

    /// The query string could not be parsed.
    #[error("{0}")]
    Query(#[from] QueryRejection),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(err) => StatusCode::from_u16(catalog_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "API error");
            "Internal server error".to_string()
        } else {
            tracing::warn!(status = %status, error = %self, "API error");
            self.to_string()
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
