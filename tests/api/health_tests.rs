//! Health Check API Tests

use axum::http::{HeaderName, HeaderValue, StatusCode};

use crate::common::Fixture;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = Fixture::new().into_app();

    let response = app.get("/health").await;

    response.assert_status(StatusCode::OK);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = Fixture::new().into_app();

    let response = app.get("/health/live").await;

    response.assert_status(StatusCode::OK);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counter() {
    let app = Fixture::new().into_app();
    app.get("/health").await;

    let response = app.get("/metrics").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("chat_sidebar_http_requests_total"));
}

#[tokio::test]
async fn test_cross_origin_gzip_request_passes_every_layer() {
    let app = Fixture::new().into_app();

    let response = app
        .get("/health/live")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://app.example.com"),
        )
        .add_header(
            HeaderName::from_static("accept-encoding"),
            HeaderValue::from_static("gzip"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin").to_str().unwrap(),
        "*"
    );
}
