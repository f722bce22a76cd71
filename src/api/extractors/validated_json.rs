//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::config::INVALID_BODY_MESSAGE;
use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// A body that is not JSON (or has the wrong shape) is rejected with
/// "Invalid request body"; a body that fails validation is rejected with
/// the first rule's message. Both are 400s.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::validation(INVALID_BODY_MESSAGE)
        })?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_validation_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// First validation message, or a generic one when no rule set a message
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".to_string())
}
