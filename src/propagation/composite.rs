//! Composite propagator with defined scheme precedence.
//!
//! # Responsibilities
//! - Orchestrate extraction: custom scheme first, W3C fallback
//! - Orchestrate injection: custom header plus delegated W3C headers
//! - Enumerate the full header field set for header-based collaborators
//!   (CORS allow-lists and the un-instrumented-client check)
//!
//! # Design Decisions
//! - Extraction short-circuits: when the custom scheme adopts a
//!   context the W3C propagator is never consulted. The SDK composite
//!   runs every propagator in sequence and would let a later scheme
//!   override the custom one, so precedence is implemented here instead
//! - The W3C propagator is the SDK implementation, treated as an
//!   external collaborator and invoked unchanged

use std::sync::OnceLock;

use opentelemetry::{
    propagation::{text_map_propagator::FieldIter, Extractor, Injector, TextMapPropagator},
    Context,
};
use opentelemetry_sdk::propagation::TraceContextPropagator;

use crate::propagation::custom::TraceIdPropagator;
use crate::propagation::{TRACEPARENT_HEADER, TRACESTATE_HEADER, TRACE_ID_HEADER};

static COMPOSITE_FIELDS: OnceLock<[String; 3]> = OnceLock::new();

fn composite_fields() -> &'static [String; 3] {
    COMPOSITE_FIELDS.get_or_init(|| {
        [
            TRACE_ID_HEADER.to_owned(),
            TRACEPARENT_HEADER.to_owned(),
            TRACESTATE_HEADER.to_owned(),
        ]
    })
}

/// The gateway-wide propagator: proprietary `X-Trace-Id` scheme with
/// W3C Trace Context as the fallback.
#[derive(Clone, Debug, Default)]
pub struct GatewayPropagator {
    custom: TraceIdPropagator,
    standard: TraceContextPropagator,
}

impl GatewayPropagator {
    pub fn new() -> Self {
        GatewayPropagator {
            custom: TraceIdPropagator::new(),
            standard: TraceContextPropagator::new(),
        }
    }
}

impl TextMapPropagator for GatewayPropagator {
    fn inject_context(&self, cx: &Context, injector: &mut dyn Injector) {
        self.custom.inject_context(cx, injector);
        self.standard.inject_context(cx, injector);
    }

    fn extract_with_context(&self, cx: &Context, extractor: &dyn Extractor) -> Context {
        if let Some(adopted) = self.custom.try_extract(cx, extractor) {
            return adopted;
        }
        self.standard.extract_with_context(cx, extractor)
    }

    fn fields(&self) -> FieldIter<'_> {
        FieldIter::new(composite_fields())
    }
}
