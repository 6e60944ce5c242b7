use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::AppError;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// A body that is not valid JSON for `T` is rejected with
/// `400 {"error": "Invalid request body"}`; a body that breaks a validation rule is
/// rejected with `400 {"errors": {field: message}}`.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            AppError::BadRequest("Invalid request body".to_string())
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
