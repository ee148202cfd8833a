//! Boundary interceptor: per-handler span enrichment.
//!
//! # Responsibilities
//! - Tag the active request span with the correlation id after the
//!   handler finishes, success or failure
//! - Label requests from un-instrumented clients with the configured
//!   remote service name so the dependency graph attributes them
//!
//! # Design Decisions
//! - Runs inside the boundary middleware's span (inner layer), so the
//!   "currently active span" is the request span: the ordering
//!   constraint relative to the context-creating filter
//! - Independent of the global `CorrelationLayer`; both may tag the
//!   same span with the same key, which is deliberate redundancy
//! - Un-instrumented detection reuses the composite propagator's field
//!   set: no trace header at all means the caller carries no
//!   instrumentation

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use opentelemetry::propagation::TextMapPropagator;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::http::server::AppState;
use crate::scope::{RequestScope, GLOBAL_ID_ATTRIBUTE};

/// Span attribute naming the remote side of this server edge.
pub const PEER_SERVICE_ATTRIBUTE: &str = "peer.service";

/// Inner middleware wrapping handler dispatch.
pub async fn enrich_handler_span(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // The request span is already active here; safe to label it.
    if !carries_trace_headers(&state, request.headers()) {
        tracing::Span::current().set_attribute(
            PEER_SERVICE_ATTRIBUTE,
            state.propagation.remote_service_name.clone(),
        );
    }

    let response = next.run(request).await;

    // Tag after completion regardless of outcome, independent of the
    // global enrichment layer.
    if let Some(correlation_id) = RequestScope::current_correlation_id() {
        tracing::Span::current().set_attribute(GLOBAL_ID_ATTRIBUTE, correlation_id.to_string());
    }

    response
}

fn carries_trace_headers(state: &AppState, headers: &HeaderMap) -> bool {
    state
        .propagator
        .fields()
        .any(|field| headers.contains_key(field))
}
