//! Routes for bounded integer generation.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use rando_core::scalar::Scalar;
use rando_numeric::application::random_length::sample_integer_of_random_length;
use rando_numeric::domain::integer::{IntegerSpec, sample_integer};
use rando_numeric::domain::values::DigitString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::LengthRangeRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct IntegerRequest {
    /// Exact number of digits.
    pub length: i64,
    /// Inclusive lower bound.
    #[serde(default)]
    pub start: Option<Scalar>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub end: Option<Scalar>,
    /// Keep a leading zero instead of redrawing it.
    #[serde(default)]
    pub allow_leading_zero: bool,
    /// Return the digits as a string.
    #[serde(default)]
    pub as_str: bool,
    /// Draw from the cryptographically secure source.
    #[serde(default)]
    pub secure: bool,
}

impl IntegerRequest {
    fn to_spec(&self) -> Result<IntegerSpec, ApiError> {
        let mut spec = IntegerSpec::new(self.length);
        spec.start = self.start.as_ref().map(Scalar::as_integer_bound).transpose()?;
        spec.end = self.end.as_ref().map(Scalar::as_integer_bound).transpose()?;
        spec.allow_leading_zero = self.allow_leading_zero;
        Ok(spec)
    }
}

/// Request body for POST /random-length.
#[derive(Debug, Deserialize)]
pub struct IntegerLengthRequest {
    /// Range the length is drawn from.
    #[serde(flatten)]
    pub range: LengthRangeRequest,
    /// Return the digits as a string.
    #[serde(default)]
    pub as_str: bool,
}

/// Response body carrying one generated integer.
#[derive(Debug, Serialize)]
pub struct IntegerResponse {
    /// A JSON number, or the digit string when `as_str` was requested.
    pub value: Value,
}

impl IntegerResponse {
    fn render(digits: DigitString, as_str: bool) -> Result<Self, ApiError> {
        let value = if as_str {
            Value::String(digits.into_string())
        } else {
            let number = digits.to_u64().ok_or(ApiError::NumericOverflow {
                digits: digits.len(),
            })?;
            Value::from(number)
        };
        Ok(Self { value })
    }
}

/// POST /
#[instrument(skip(state, request), fields(length = request.length, secure = request.secure))]
async fn generate_integer(
    State(state): State<AppState>,
    Json(request): Json<IntegerRequest>,
) -> Result<Json<IntegerResponse>, ApiError> {
    let spec = request.to_spec()?;

    let digits = state
        .generate(request.secure, move |rng, limits| {
            sample_integer(rng, &spec, limits)
        })
        .await?;

    info!(digits = digits.len(), "generated integer");

    Ok(Json(IntegerResponse::render(digits, request.as_str)?))
}

/// POST /random-length
#[instrument(skip(state, request), fields(minlen = request.range.minlen, maxlen = request.range.maxlen))]
async fn generate_integer_of_random_length(
    State(state): State<AppState>,
    Json(request): Json<IntegerLengthRequest>,
) -> Result<Json<IntegerResponse>, ApiError> {
    let range = request.range.range();

    let digits = state
        .generate(request.range.secure, move |rng, limits| {
            sample_integer_of_random_length(rng, &range, limits)
        })
        .await?;

    info!(digits = digits.len(), "generated integer of random length");

    Ok(Json(IntegerResponse::render(digits, request.as_str)?))
}

/// Returns the router for integer generation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_integer))
        .route("/random-length", post(generate_integer_of_random_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::{NonZeroU64, NonZeroUsize};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rando_core::limits::SamplingLimits;
    use rando_test_support::{PanickingRng, SequenceRng};
    use tower::ServiceExt;

    use crate::state::{RngFactory, rng_factory};

    fn app_state_with(fast: RngFactory, secure: RngFactory) -> AppState {
        AppState::new(
            fast,
            secure,
            SamplingLimits::with_max_attempts(NonZeroU64::new(50).unwrap())
                .with_max_length(NonZeroUsize::new(40).unwrap()),
        )
    }

    fn panicking() -> RngFactory {
        rng_factory(|| PanickingRng)
    }

    fn scripted(digits: &'static str) -> RngFactory {
        rng_factory(move || SequenceRng::from_digits(digits))
    }

    async fn post(state: AppState, uri: &str, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_integer_returns_number() {
        let state = app_state_with(scripted("110"), panicking());
        let body = serde_json::json!({ "length": 3, "start": 100, "end": 120 });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["value"], 110);
    }

    #[tokio::test]
    async fn test_generate_integer_as_str_keeps_leading_zero() {
        let state = app_state_with(scripted("007"), panicking());
        let body = serde_json::json!({ "length": 3, "allow_leading_zero": true, "as_str": true });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["value"], "007");
    }

    #[tokio::test]
    async fn test_secure_flag_selects_secure_source() {
        let state = app_state_with(panicking(), scripted("42"));
        let body = serde_json::json!({ "length": 2, "secure": true });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["value"], 42);
    }

    #[tokio::test]
    async fn test_boolean_bound_returns_400() {
        let state = app_state_with(panicking(), panicking());
        let body = serde_json::json!({ "length": 1, "start": true });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "wrong_length");
    }

    #[tokio::test]
    async fn test_bound_length_mismatch_returns_400() {
        let state = app_state_with(panicking(), panicking());
        let body = serde_json::json!({ "length": 3, "end": 1000 });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "wrong_length");
    }

    #[tokio::test]
    async fn test_wide_numeric_value_returns_422() {
        let state = app_state_with(scripted("1111111111111111111111111"), panicking());
        let body = serde_json::json!({ "length": 25 });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "numeric_overflow");
    }

    #[tokio::test]
    async fn test_random_length_draws_length_then_digits() {
        let state = app_state_with(rng_factory(|| SequenceRng::new(vec![2, 9, 1])), panicking());
        let body = serde_json::json!({ "minlen": 1, "maxlen": 4, "as_str": true });

        let (status, json) = post(state, "/random-length", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["value"], "91");
    }

    #[tokio::test]
    async fn test_length_above_the_ceiling_returns_400_without_drawing() {
        let state = app_state_with(panicking(), panicking());
        let body = serde_json::json!({ "length": 41, "as_str": true });

        let (status, json) = post(state, "/", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "wrong_length");
    }

    #[tokio::test]
    async fn test_random_length_maxlen_above_the_ceiling_returns_400() {
        let state = app_state_with(panicking(), panicking());
        let body = serde_json::json!({ "minlen": 1, "maxlen": 41 });

        let (status, json) = post(state, "/random-length", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "wrong_length");
    }
}
