//! Typed API error for HTTP handlers.
//!
//! Converts service-layer errors into proper HTTP responses with JSON body
//! and status codes. Handlers return `Result<Json<T>, ApiError>` so every
//! failure is classified and shaped exactly once, at this boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storefront_service::ServiceError;
use storefront_storage::StorageError;

/// API error with HTTP status code, human-readable message, and the request
/// path that produced it.
///
/// Converts to JSON response:
/// `{"status": u16, "message": "...", "path": "...", "errors": [...]?}`
/// where `errors` is present only for multi-violation validation and
/// constraint failures.
///
/// Storage failures log the real error server-side and return a static
/// message to the client without error detail.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
    errors: Option<Vec<String>>,
}

impl ApiError {
    /// 400: one or more required-field constraints violated on the body.
    pub fn validation(errors: Vec<String>, path: &str) -> Self {
        tracing::warn!(path, count = errors.len(), "Validation failed");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_owned(),
            path: path.to_owned(),
            errors: Some(errors),
        }
    }

    /// 400: a validated query parameter violates a constraint.
    pub fn constraint_violation(errors: Vec<String>, path: &str) -> Self {
        tracing::warn!(path, ?errors, "Constraint violation");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Constraint violation".to_owned(),
            path: path.to_owned(),
            errors: Some(errors),
        }
    }

    /// 400: explicit business-rule rejection raised by the pipeline.
    pub fn bad_request(message: impl Into<String>, path: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            path: path.to_owned(),
            errors: None,
        }
    }

    /// 404: entity lookup by id yielded no row.
    pub fn not_found(message: impl Into<String>, path: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            path: path.to_owned(),
            errors: None,
        }
    }

    /// 400: a path parameter could not be converted to its expected type.
    pub fn type_mismatch(value: &str, parameter: &str, path: &str) -> Self {
        let message =
            format!("Invalid value '{value}' for parameter '{parameter}'. Expected type: i64");
        tracing::warn!(path, %message, "Type mismatch");
        Self { status: StatusCode::BAD_REQUEST, message, path: path.to_owned(), errors: None }
    }

    /// Classify a service-layer failure. Total over [`ServiceError`].
    pub fn from_service(err: ServiceError, path: &str) -> Self {
        match err {
            ServiceError::Validation(errors) => Self::validation(errors, path),
            ServiceError::InvalidReference(reason) => {
                tracing::error!(path, %reason, "Service rejected request");
                Self::bad_request(reason, path)
            },
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                tracing::error!(path, entity, id, "Entity not found");
                Self::not_found(format!("{entity} not found"), path)
            },
            ServiceError::Storage(err) => {
                tracing::error!(path, error = %err, "Database error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Database access error".to_owned(),
                    path: path.to_owned(),
                    errors: None,
                }
            },
        }
    }

    /// 500: a failure outside every classified category, body-parse
    /// rejections included. Details logged, not exposed.
    pub fn unexpected(err: impl std::fmt::Display, path: &str) -> Self {
        tracing::error!(path, error = %err, "Unexpected error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "An unexpected error occurred".to_owned(),
            path: path.to_owned(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "status": self.status.as_u16(),
            "message": self.message,
            "path": self.path,
        });
        if let Some(errors) = self.errors {
            body["errors"] = serde_json::json!(errors);
        }
        (self.status, Json(body)).into_response()
    }
}
