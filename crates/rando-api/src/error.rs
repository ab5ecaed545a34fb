//! Rando API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rando_core::error::{GenerationError, WrongLengthError};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A numeric response was requested for a value too wide for JSON.
    #[error("value with {digits} digits does not fit a JSON number; request as_str")]
    NumericOverflow {
        /// Digit count of the generated value.
        digits: usize,
    },

    /// The generation task could not complete.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<WrongLengthError> for ApiError {
    fn from(err: WrongLengthError) -> Self {
        Self::Generation(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Generation(GenerationError::WrongLength(_)) => {
                (StatusCode::BAD_REQUEST, "wrong_length")
            }
            Self::Generation(GenerationError::Allocation { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "allocation_failed")
            }
            Self::Generation(GenerationError::Unsatisfiable { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unsatisfiable_constraint")
            }
            Self::NumericOverflow { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "numeric_overflow"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
