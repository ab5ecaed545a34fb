//! Routes for bounded float generation.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use rando_core::scalar::Scalar;
use rando_numeric::application::random_length::sample_float_of_random_length;
use rando_numeric::domain::float::{FloatSpec, sample_float};
use rando_numeric::domain::values::FixedDecimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::LengthRangeRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
///
/// Bounds may be JSON numbers or strings; a string such as `"10.00"` keeps its
/// trailing fractional zeros for the digit-length check.
#[derive(Debug, Deserialize)]
pub struct FloatRequest {
    /// Exact number of integer digits.
    pub prelength: i64,
    /// Exact number of fractional digits.
    pub postlength: i64,
    /// Inclusive lower bound.
    #[serde(default)]
    pub start: Option<Scalar>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub end: Option<Scalar>,
    /// Draw from the cryptographically secure source.
    #[serde(default)]
    pub secure: bool,
}

/// Response body carrying one generated float.
#[derive(Debug, Serialize)]
pub struct FloatResponse {
    /// The value as a JSON number.
    pub value: f64,
    /// The exact digits, trailing zeros included.
    pub digits: String,
}

impl From<FixedDecimal> for FloatResponse {
    fn from(decimal: FixedDecimal) -> Self {
        Self {
            value: decimal.to_f64(),
            digits: decimal.to_string(),
        }
    }
}

/// POST /
#[instrument(skip(state, request), fields(prelength = request.prelength, postlength = request.postlength, secure = request.secure))]
async fn generate_float(
    State(state): State<AppState>,
    Json(request): Json<FloatRequest>,
) -> Result<Json<FloatResponse>, ApiError> {
    let spec = FloatSpec::from_scalars(
        request.prelength,
        request.postlength,
        request.start.as_ref(),
        request.end.as_ref(),
    )?;

    let decimal = state
        .generate(request.secure, move |rng, limits| {
            sample_float(rng, &spec, limits)
        })
        .await?;

    info!(digits = %decimal, "generated float");

    Ok(Json(decimal.into()))
}

/// POST /random-length
#[instrument(skip(state, request), fields(minlen = request.minlen, maxlen = request.maxlen))]
async fn generate_float_of_random_length(
    State(state): State<AppState>,
    Json(request): Json<LengthRangeRequest>,
) -> Result<Json<FloatResponse>, ApiError> {
    let range = request.range();

    let decimal = state
        .generate(request.secure, move |rng, limits| {
            sample_float_of_random_length(rng, &range, limits)
        })
        .await?;

    info!(digits = %decimal, "generated float of random length");

    Ok(Json(decimal.into()))
}

/// Returns the router for float generation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_float))
        .route("/random-length", post(generate_float_of_random_length))
}
