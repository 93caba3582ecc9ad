//! Error types for the Strand server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use strand_core::{AnalyzeError, StoreError, TranslateError};
use strand_sqlite::SqliteError;
use thiserror::Error;

/// Errors raised while configuring or starting the server.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage backend could not be opened
    #[error("database error: {0}")]
    Database(#[from] SqliteError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the server Error.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP error response.
///
/// Every error returned by the HTTP layer serialises as
/// `{ "error": "<message>" }` with the matching status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(_) => Self::conflict("String already exists in the system"),
            StoreError::NotFound(_) => Self::not_found(),
            other => {
                tracing::error!(error = %other, "store operation failed");
                Self::internal("Internal storage error")
            }
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::InvalidInput { .. } => {
                Self::unprocessable("Invalid data type for \"value\" must be a string")
            }
        }
    }
}

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Unparseable { .. } => {
                Self::bad_request("Unable to parse natural language query")
            }
            TranslateError::ConflictingFilters { .. } => {
                Self::unprocessable("Query parsed but resulted in conflicting filters")
            }
        }
    }
}
