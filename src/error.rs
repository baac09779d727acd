//! Request-level errors and their HTTP representation

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::validation::ValidationError;

/// Errors a handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    /// No movie has the requested id
    #[error("Movie not found")]
    NotFound,

    /// The creation payload was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::malformed_body(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Movie not found" })),
            )
                .into_response(),
            ApiError::Validation(err) => {
                debug!(error = %err, "Rejected movie payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid movie data",
                        "issues": err.issues
                    })),
                )
                    .into_response()
            }
        }
    }
}
