//! HTTP error response mapping.
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | validation, undecodable body or query | 422 | `{"errors": {"<field>": ["<message>", …]}}` |
//! | not found | 404 | `{"error": "not_found", "message": "…"}` |
//! | anything else | 500 | `{"error": "internal_error", "message": "Internal error."}` |
//!
//! Internal failures are logged and never described to the client.

use std::any::Any;
use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homeinv_domain::error::{InventoryError, ValidationError, ValidationErrors};

/// JSON error body for non-validation failures.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// JSON body for validation failures.
#[derive(Serialize)]
struct ValidationBody {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationBody {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors
                .iter()
                .map(|(field, errors)| (field, errors.iter().map(ToString::to_string).collect()))
                .collect(),
        }
    }
}

/// The fixed 500 response.
pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal_error",
            message: "Internal error.".to_string(),
        }),
    )
        .into_response()
}

pub(crate) fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not_found",
            message,
        }),
    )
        .into_response()
}

/// Panic handler for [`CatchPanicLayer`](tower_http::catch_panic::CatchPanicLayer).
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    internal_error()
}

/// Maps [`InventoryError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(InventoryError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        Self(
            ValidationErrors::single(
                "body",
                ValidationError::Malformed {
                    expected: "a JSON object of string fields",
                },
            )
            .into(),
        )
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected query string");
        Self(
            ValidationErrors::single(
                "query",
                ValidationError::Malformed {
                    expected: "a query string with at most one value per parameter",
                },
            )
            .into(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            InventoryError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody::from(errors)),
            )
                .into_response(),
            InventoryError::NotFound(err) => not_found(format!("{} not found.", err.entity)),
            InventoryError::InvalidIdentifier(err) => {
                tracing::error!(error = %err, "invalid identifier");
                internal_error()
            }
            InventoryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                internal_error()
            }
        }
    }
}
