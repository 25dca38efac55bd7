//! Request Logging and Metrics
//!
//! Tracing spans per request and Prometheus request accounting.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};
use uuid::Uuid;

use crate::infrastructure::metrics;

type MakeRequestSpan = fn(&Request) -> Span;

/// Trace layer opening one span per request, tagged with a fresh request id.
pub fn create_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan>
{
    TraceLayer::new_for_http()
        .make_span_with(make_request_span as MakeRequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Record request count and latency, labelled by the matched route.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;

    metrics::record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
