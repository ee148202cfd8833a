//! Boundary filter: runs once per inbound request.
//!
//! # Responsibilities
//! - Read or generate the correlation id (X-Global-ID)
//! - Run trace extraction before any span exists for the request
//! - Open the request span and the request scope, carrying both through
//!   the whole (possibly multi-threaded) request future
//! - Guarantee teardown on every exit path
//!
//! # Design Decisions
//! - Extraction happens against an empty ambient context: the inbound
//!   headers are the only source of remote identity
//! - The correlation id is also placed in OTel baggage, best-effort, so
//!   it crosses into spans created asynchronously downstream; baggage
//!   being unavailable never affects the request
//! - Teardown is not a code path, it is the scoped future itself:
//!   normal return, error response, and cancellation all release the
//!   binding

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use opentelemetry::baggage::BaggageExt;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TraceContextExt;
use opentelemetry::{Context, KeyValue};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::propagation::HeaderExtractor;
use crate::scope::{CorrelationId, RequestScope, GLOBAL_ID_ATTRIBUTE, GLOBAL_ID_HEADER};

/// Outermost application middleware: establishes the request scope.
pub async fn propagation_boundary(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    // 1. Correlation id: caller-supplied wins, otherwise generate.
    let supplied = request
        .headers()
        .get(GLOBAL_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(CorrelationId::from_supplied);
    let supplied_by_caller = supplied.is_some();
    let correlation_id = supplied.unwrap_or_else(CorrelationId::generate);

    // 2. Trace extraction, before the request span is created.
    let parent_cx = state
        .propagator
        .extract_with_context(&Context::new(), &HeaderExtractor(request.headers()));
    let remote = parent_cx.span().span_context().clone();
    let trace_context = if remote.is_valid() { Some(remote) } else { None };

    // 3. Best-effort baggage binding for asynchronously created spans.
    let parent_cx = parent_cx.with_baggage([KeyValue::new(
        GLOBAL_ID_ATTRIBUTE,
        correlation_id.to_string(),
    )]);

    // 4. Request span: `global_id` as a field makes every log line
    //    inside the request carry it.
    let span = tracing::info_span!(
        "request",
        method = %method,
        path = %path,
        global_id = %correlation_id
    );
    span.set_parent(parent_cx);

    // 5. Run the rest of the chain inside span + scope. Dropping the
    //    scoped future is the teardown.
    let scope = RequestScope::new(correlation_id, supplied_by_caller, trace_context);
    let response = scope.enter(next.run(request).instrument(span)).await;

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}
