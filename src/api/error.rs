//! Unified API error handling with fixed response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::gemini::ModelError;

/// API error type.
///
/// Downstream detail is logged but never exposed to the caller: every storage
/// or model failure collapses into the same generic 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("The AI service encountered an error.")]
    Upstream(#[source] anyhow::Error),
}

impl ApiError {
    /// 400 for a missing `message`/`userId` field.
    pub fn missing_params() -> Self {
        Self::BadRequest("Missing 'message' or 'userId' parameter")
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Upstream(source) => {
                error!(error = ?source, "Model or storage error");
            }
            Self::BadRequest(message) => {
                debug!(message = %message, "Client error");
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Upstream(err)
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        Self::Upstream(err.into())
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
