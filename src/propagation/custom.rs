//! Proprietary single-header trace propagation scheme.
//!
//! # Responsibilities
//! - Inject the active trace identifier as the `X-Trace-Id` header
//! - Extract a trace identifier from `X-Trace-Id` and adopt it as a
//!   remote parent
//!
//! # Design Decisions
//! - The header carries only the trace id. Adoption is one-directional
//!   and lossy: the real remote span id is never recovered, the local
//!   span is rooted under the placeholder id from `context.rs`
//! - Any malformed value (wrong length, wrong charset, empty) is
//!   treated as "header absent" and leaves the ambient context alone

use std::sync::OnceLock;

use opentelemetry::{
    propagation::{text_map_propagator::FieldIter, Extractor, Injector, TextMapPropagator},
    trace::TraceContextExt,
    Context,
};

use crate::propagation::context::adopt_remote_trace;
use crate::propagation::TRACE_ID_HEADER;

static TRACE_ID_FIELDS: OnceLock<[String; 1]> = OnceLock::new();

fn trace_id_fields() -> &'static [String; 1] {
    TRACE_ID_FIELDS.get_or_init(|| [TRACE_ID_HEADER.to_owned()])
}

/// Propagates bare trace identifiers under the `X-Trace-Id` header.
#[derive(Clone, Debug, Default)]
pub struct TraceIdPropagator {
    _private: (),
}

impl TraceIdPropagator {
    pub fn new() -> Self {
        TraceIdPropagator { _private: () }
    }

    /// Attempt extraction. Returns `None` when the header is missing or
    /// malformed, so a composite can fall through to the next scheme
    /// without guessing whether the context changed.
    pub fn try_extract(&self, cx: &Context, extractor: &dyn Extractor) -> Option<Context> {
        let candidate = extractor.get(TRACE_ID_HEADER)?;
        let span_context = adopt_remote_trace(candidate)?;

        tracing::debug!(trace_id = candidate, "Adopted trace id from X-Trace-Id header");
        Some(cx.with_remote_span_context(span_context))
    }
}

impl TextMapPropagator for TraceIdPropagator {
    fn inject_context(&self, cx: &Context, injector: &mut dyn Injector) {
        let span = cx.span();
        let span_context = span.span_context();
        if span_context.is_valid() {
            let trace_id = span_context.trace_id().to_string();
            tracing::debug!(trace_id = %trace_id, "Injecting trace id into carrier");
            injector.set(TRACE_ID_HEADER, trace_id);
        }
    }

    fn extract_with_context(&self, cx: &Context, extractor: &dyn Extractor) -> Context {
        self.try_extract(cx, extractor)
            .unwrap_or_else(|| cx.clone())
    }

    fn fields(&self) -> FieldIter<'_> {
        FieldIter::new(trace_id_fields())
    }
}
