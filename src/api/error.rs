//! The error type returned by the HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Message sent with a 500 when internal error details are hidden.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors a handler can answer with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be parsed. Carries the parser's message.
    #[error("{0}")]
    BadRequest(String),

    /// The store has no contact with the requested id.
    #[error("Contact not found")]
    NotFound,

    /// Any other store failure.
    #[error("{0}")]
    Internal(String),
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
