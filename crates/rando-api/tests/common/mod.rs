//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rando_core::limits::SamplingLimits;
use rando_core::rng::FastRng;
use rando_test_support::{PanickingRng, SequenceRng};
use tower::ServiceExt;

use rando_api::config::DEFAULT_MAX_LENGTH;
use rando_api::state::{AppState, RngFactory, rng_factory};

/// The limits the server runs with when nothing is configured.
pub fn server_limits() -> SamplingLimits {
    SamplingLimits::default().with_max_length(NonZeroUsize::new(DEFAULT_MAX_LENGTH).unwrap())
}

/// A factory handing out `FastRng`s seeded `first`, `first + 1`, ...
pub fn seeded_from(first: u64) -> RngFactory {
    let next = AtomicU64::new(first);
    rng_factory(move || FastRng::seeded(next.fetch_add(1, Ordering::Relaxed)))
}

/// Build the full app router with seeded sources.
pub fn build_test_app() -> Router {
    build_test_app_with(seeded_from(42), seeded_from(1042), server_limits())
}

/// Build the full app router whose fast source replays `digits` on every
/// request, for tests that need exact digits.
pub fn build_test_app_with_rng(digits: &'static str) -> Router {
    build_test_app_with(
        rng_factory(move || SequenceRng::from_digits(digits)),
        seeded_from(1042),
        server_limits(),
    )
}

/// Build the full app router with sources that panic if drawn from, for
/// requests that must fail validation first.
pub fn build_test_app_without_draws() -> Router {
    build_test_app_with(
        rng_factory(|| PanickingRng),
        rng_factory(|| PanickingRng),
        server_limits(),
    )
}

/// Build the full app router from explicit source factories and limits.
pub fn build_test_app_with(fast: RngFactory, secure: RngFactory, limits: SamplingLimits) -> Router {
    rando_api::build_router(AppState::new(fast, secure, limits))
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
