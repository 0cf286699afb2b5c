//! Request tracing for page and content routes

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier},
    trace::{DefaultOnBodyChunk, DefaultOnEos, TraceLayer},
};
use tracing::{info_span, Span};

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnRequestFn = fn(&Request<Body>, &Span);
type OnResponseFn = fn(&Response<Body>, Duration, &Span);
type OnFailureFn = fn(ServerErrorsFailureClass, Duration, &Span);

pub type PageTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeSpanFn,
    OnRequestFn,
    OnResponseFn,
    DefaultOnBodyChunk,
    DefaultOnEos,
    OnFailureFn,
>;

pub fn logging_layer() -> PageTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_request(on_request as OnRequestFn)
        .on_response(on_response as OnResponseFn)
        .on_failure(on_failure as OnFailureFn)
}

fn make_span(request: &Request<Body>) -> Span {
    info_span!(
        "page_request",
        method = %request.method(),
        path = %request.uri().path(),
        query = ?request.uri().query(),
    )
}

fn on_request(request: &Request<Body>, _span: &Span) {
    tracing::debug!("serving {} {}", request.method(), request.uri().path());
}

fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status();
    let latency_ms = latency.as_millis();

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), latency_ms, "page failed");
    } else if status.is_client_error() {
        tracing::warn!(status = status.as_u16(), latency_ms, "page not served");
    } else {
        tracing::info!(status = status.as_u16(), latency_ms, "page served");
    }
}

fn on_failure(error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        latency_ms = latency.as_millis(),
        error = ?error,
        "request failed"
    );
}
