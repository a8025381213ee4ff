//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repasando_core::{RepasandoError, DUPLICATE_FIELD_MESSAGE};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Body of every non-validation error that carries JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub RepasandoError);

impl From<RepasandoError> for AppError {
    fn from(err: RepasandoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            RepasandoError::Validation(fields) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            RepasandoError::DuplicateField(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            RepasandoError::UniqueViolation(detail) => {
                tracing::warn!("Unique violation reached the API layer: {}", detail);
                (StatusCode::BAD_REQUEST, DUPLICATE_FIELD_MESSAGE).into_response()
            }
            err @ RepasandoError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(err.to_string()))).into_response()
            }
            RepasandoError::InvalidPage(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
            }
            err @ (RepasandoError::Database(_)
            | RepasandoError::Configuration(_)
            | RepasandoError::Internal(_)) => {
                error!(code = err.error_code(), "Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<Response> {
    Ok(Json(data).into_response())
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> ApiResult<Response> {
    Ok((StatusCode::CREATED, Json(data)).into_response())
}

/// Helper to create a no content (204) response.
pub fn no_content() -> ApiResult<Response> {
    Ok(StatusCode::NO_CONTENT.into_response())
}
