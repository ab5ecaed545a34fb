//! Routes for bounded complex generation.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use rando_core::error::WrongLengthError;
use rando_core::scalar::Scalar;
use rando_numeric::application::random_length::sample_complex_of_random_length;
use rando_numeric::domain::bounds::ComplexBound;
use rando_numeric::domain::complex::{ComplexSpec, sample_complex};
use rando_numeric::domain::values::Complex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::LengthRangeRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// A complex bound as sent over the wire.
#[derive(Debug, Deserialize)]
pub struct ComplexBoundBody {
    /// Real component.
    pub re: Scalar,
    /// Imaginary component.
    pub im: Scalar,
}

impl ComplexBoundBody {
    fn to_bound(&self) -> Result<ComplexBound, WrongLengthError> {
        ComplexBound::from_scalars(&self.re, &self.im)
    }
}

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct ComplexRequest {
    /// Integer digits of the real part.
    pub real_prelength: i64,
    /// Fractional digits of the real part.
    pub real_postlength: i64,
    /// Integer digits of the imaginary part.
    pub imag_prelength: i64,
    /// Fractional digits of the imaginary part.
    pub imag_postlength: i64,
    /// Lower bound, compared per component.
    #[serde(default)]
    pub start: Option<ComplexBoundBody>,
    /// Upper bound, compared per component.
    #[serde(default)]
    pub end: Option<ComplexBoundBody>,
    /// Draw from the cryptographically secure source.
    #[serde(default)]
    pub secure: bool,
}

impl ComplexRequest {
    fn to_spec(&self) -> Result<ComplexSpec, WrongLengthError> {
        let mut spec = ComplexSpec::new(
            self.real_prelength,
            self.real_postlength,
            self.imag_prelength,
            self.imag_postlength,
        );
        spec.start = self.start.as_ref().map(ComplexBoundBody::to_bound).transpose()?;
        spec.end = self.end.as_ref().map(ComplexBoundBody::to_bound).transpose()?;
        Ok(spec)
    }
}

/// Response body carrying one generated complex number.
#[derive(Debug, Serialize)]
pub struct ComplexResponse {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
    /// The exact digits, as `<re>+<im>i`.
    pub digits: String,
}

impl From<Complex> for ComplexResponse {
    fn from(value: Complex) -> Self {
        Self {
            re: value.re(),
            im: value.im(),
            digits: value.to_string(),
        }
    }
}

/// POST /
#[instrument(skip(state, request), fields(secure = request.secure))]
async fn generate_complex(
    State(state): State<AppState>,
    Json(request): Json<ComplexRequest>,
) -> Result<Json<ComplexResponse>, ApiError> {
    let spec = request.to_spec()?;

    let value = state
        .generate(request.secure, move |rng, limits| {
            sample_complex(rng, &spec, limits)
        })
        .await?;

    info!(digits = %value, "generated complex");

    Ok(Json(value.into()))
}

/// POST /random-length
#[instrument(skip(state, request), fields(minlen = request.minlen, maxlen = request.maxlen))]
async fn generate_complex_of_random_length(
    State(state): State<AppState>,
    Json(request): Json<LengthRangeRequest>,
) -> Result<Json<ComplexResponse>, ApiError> {
    let range = request.range();

    let value = state
        .generate(request.secure, move |rng, limits| {
            sample_complex_of_random_length(rng, &range, limits)
        })
        .await?;

    info!(digits = %value, "generated complex of random length");

    Ok(Json(value.into()))
}

/// Returns the router for complex generation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_complex))
        .route("/random-length", post(generate_complex_of_random_length))
}
