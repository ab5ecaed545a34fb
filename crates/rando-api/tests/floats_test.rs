//! Integration tests for float generation.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_degenerate_range_returns_exact_value() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats",
        &serde_json::json!({ "prelength": 2, "postlength": 2, "start": "10.00", "end": "10.00" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["digits"], "10.00");
    assert_eq!(json["value"], 10.0);
}

#[tokio::test]
async fn test_digits_keep_trailing_zeros() {
    let app = common::build_test_app_with_rng("123450");

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats",
        &serde_json::json!({ "prelength": 3, "postlength": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["digits"], "123.450");
}

#[tokio::test]
async fn test_numeric_bounds_are_accepted() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats",
        &serde_json::json!({ "prelength": 1, "postlength": 1, "start": 2.5, "end": 4.5, "secure": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let value = json["value"].as_f64().unwrap();
    assert!((2.5..=4.5).contains(&value));
}

#[tokio::test]
async fn test_boolean_bounds_return_400() {
    for bound in [true, false] {
        let app = common::build_test_app_without_draws();

        let (status, json) = common::post_json(
            app,
            "/api/v1/floats",
            &serde_json::json!({ "prelength": 1, "postlength": 1, "end": bound }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "wrong_length");
    }
}

#[tokio::test]
async fn test_fraction_length_mismatch_returns_400() {
    let app = common::build_test_app_without_draws();

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats",
        &serde_json::json!({ "prelength": 2, "postlength": 2, "start": 10.5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "wrong_length");
}

#[tokio::test]
async fn test_random_length_float() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats/random-length",
        &serde_json::json!({ "minlen": 2, "maxlen": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let digits = json["digits"].as_str().unwrap();
    let (integer, fraction) = digits.split_once('.').unwrap();
    assert!((2..=3).contains(&integer.len()));
    assert!((2..=3).contains(&fraction.len()));
}

#[tokio::test]
async fn test_huge_fraction_length_returns_400() {
    let app = common::build_test_app_without_draws();

    let (status, json) = common::post_json(
        app,
        "/api/v1/floats",
        &serde_json::json!({ "prelength": 1, "postlength": 50_000 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "wrong_length");
}
