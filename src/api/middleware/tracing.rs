//! Request tracing for the panel host.

use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{Span, info_span};

type PanelMakeSpan = fn(&Request<Body>) -> Span;
type PanelOnResponse = fn(&Response, Duration, &Span);

/// Creates the tracing layer for panel host requests.
///
/// Each request gets an `INFO` span with method and path. The query string is
/// left out. Completion is logged with status and latency in milliseconds:
///
/// ```text
/// INFO panel_request{method=POST path=/api/messages}: status=200 latency_ms=412 finished
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    PanelMakeSpan,
    tower_http::trace::DefaultOnRequest,
    PanelOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as PanelMakeSpan)
        .on_response(on_response as PanelOnResponse)
}

fn make_span(request: &Request<Body>) -> Span {
    info_span!(
        "panel_request",
        method = %request.method(),
        path = request.uri().path(),
    )
}

fn on_response(response: &Response, latency: Duration, _span: &Span) {
    tracing::info!(
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "finished"
    );
}
