//! Request handlers.
//!
//! Thin plumbing around the propagation core: each handler reads the
//! ambient scope, persists a log record keyed by the correlation/trace
//! id, and for the ingest path injects propagation headers into the
//! outbound carrier.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TraceContextExt;
use opentelemetry::Context;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::http::server::AppState;
use crate::outbound::{OutboundMessage, INGEST_TOPIC};
use crate::propagation::MapInjector;
use crate::scope::RequestScope;
use crate::sink::LogEntry;

/// `GET /api/hello`: persists a log record for the call.
pub async fn hello(State(state): State<AppState>) -> Response {
    tracing::info!("Hello API called");

    let key = RequestScope::current_log_key().unwrap_or_else(|| "unknown".to_string());
    let entry = LogEntry::new(key.clone(), "Hello API call received", "INFO");

    if let Err(e) = state.sink.record(entry) {
        tracing::error!(error = %e, correlation_or_trace_id = %key, "Failed to persist log record");
        return (StatusCode::INTERNAL_SERVER_ERROR, "log record not persisted").into_response();
    }

    tracing::info!(correlation_or_trace_id = %key, "Log record persisted");
    (StatusCode::OK, "Hello from trace-gateway!").into_response()
}

/// `POST /ingest/events`: forwards the event downstream with the
/// propagation headers injected into the message carrier.
pub async fn ingest_event(
    State(state): State<AppState>,
    Json(event): Json<serde_json::Value>,
) -> Response {
    tracing::info!("Received ingest event");

    let payload = match serde_json::to_string(&event) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize event payload");
            return (StatusCode::BAD_REQUEST, "unserializable event").into_response();
        }
    };

    let mut headers = HashMap::new();
    state
        .propagator
        .inject_context(&outbound_context(), &mut MapInjector(&mut headers));

    let message = OutboundMessage {
        topic: INGEST_TOPIC.to_string(),
        headers,
        payload,
    };

    if let Err(e) = state.publisher.publish(message) {
        tracing::error!(error = %e, topic = INGEST_TOPIC, "Failed to publish event");
        return (StatusCode::INTERNAL_SERVER_ERROR, "event not published").into_response();
    }

    let key = RequestScope::current_log_key().unwrap_or_else(|| "unknown".to_string());
    if let Err(e) = state
        .sink
        .record(LogEntry::new(key, "Ingest event published", "INFO"))
    {
        // Non-fatal: the event went out, only the audit record failed.
        tracing::warn!(error = %e, "Failed to persist ingest log record");
    }

    StatusCode::OK.into_response()
}

/// `GET /health`: liveness only, no propagation semantics.
pub async fn health() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

/// Context used for outbound injection.
///
/// Prefers the trace context pinned in the request scope (deterministic
/// even when span export is disabled); falls back to the active span's
/// context when no scope is bound.
fn outbound_context() -> Context {
    match RequestScope::current().and_then(|scope| scope.trace_context().cloned()) {
        Some(span_context) => Context::new().with_remote_span_context(span_context),
        None => tracing::Span::current().context(),
    }
}
