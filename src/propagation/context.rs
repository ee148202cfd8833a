//! Trace identifier validation and adoption rules.
//!
//! # Responsibilities
//! - Shape-check candidate trace identifiers (32 lowercase hex chars)
//! - Build the adopted remote span context for the custom scheme
//!
//! # Design Decisions
//! - The custom scheme carries no span id, so adoption roots the local
//!   span under a fixed placeholder span id rather than a real remote
//!   parent. This is deliberately lossy: only the trace id is trusted.
//! - Adopted contexts are always marked sampled.

use opentelemetry::trace::{SpanContext, SpanId, TraceFlags, TraceId, TraceState};

/// Fixed span id used to root a local span under a remote trace when the
/// inbound scheme carries no span identifier of its own.
pub fn placeholder_span_id() -> SpanId {
    SpanId::from(1u64)
}

/// Returns true if `value` is a well-formed 128-bit trace identifier:
/// exactly 32 lowercase hexadecimal characters, not all zeroes.
pub fn is_valid_trace_id(value: &str) -> bool {
    value.len() == 32
        && value
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        && value.bytes().any(|b| b != b'0')
}

/// Build the remote span context adopted from a bare trace identifier.
///
/// Returns `None` when the identifier fails shape validation; callers
/// must then leave the ambient context untouched.
pub fn adopt_remote_trace(candidate: &str) -> Option<SpanContext> {
    if !is_valid_trace_id(candidate) {
        return None;
    }
    let trace_id = TraceId::from_hex(candidate).ok()?;

    Some(SpanContext::new(
        trace_id,
        placeholder_span_id(),
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    ))
}
