//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes the body and runs the `validator` rules
//! before the handler sees it. Both failure kinds answer 400: a malformed
//! body gets `{"error": "Invalid JSON: ..."}`, a rule violation gets a flat
//! map from JSON field name to its message.

use crate::responses::{AppError, ErrorBody};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repasando_core::{first_field_errors, RepasandoError};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// JSON extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use repasando_rest::extractors::ValidatedJson;
/// use repasando_service::UserRequest;
///
/// async fn create_user(ValidatedJson(request): ValidatedJson<UserRequest>) {
///     // request is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// At least one field broke a rule.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ErrorBody::new(format!("Invalid JSON: {}", rejection.body_text()));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let fields = first_field_errors(&errors);
                debug!(?fields, "Request validation failed");
                AppError(RepasandoError::Validation(fields)).into_response()
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
