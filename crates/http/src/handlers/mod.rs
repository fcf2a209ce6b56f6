pub mod customers;
pub mod orders;
pub mod products;

use axum::extract::{FromRequest, OriginalUri, Request};
use serde::de::DeserializeOwned;

use crate::api_error::ApiError;

/// Parse a numeric path segment, classifying failures as a type mismatch
/// rather than letting the framework shape the rejection.
pub(crate) fn parse_id(raw: &str, path: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::type_mismatch(raw, "id", path))
}

/// `axum::Json` replacement whose rejection carries the standard error body.
///
/// The framework's own rejection is a plain-text response that leaks parser
/// detail; a malformed body instead gets classified as an unexpected error,
/// keeping the body shape uniform across every failure.
pub(crate) struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map_or_else(|| req.uri().path().to_owned(), |uri| uri.0.path().to_owned());
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::unexpected(rejection, &path)),
        }
    }
}
