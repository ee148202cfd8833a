//! Global span enrichment: correlation id on every observation.
//!
//! # Responsibilities
//! - Stamp the ambient correlation id on every OpenTelemetry span
//!   created anywhere in the process while a request scope is bound
//!
//! # Design Decisions
//! - Implemented as a `tracing_subscriber` layer reading the span's
//!   OTel builder, so it covers spans from any module without those
//!   modules knowing about correlation at all
//! - Redundant with the boundary interceptor in `http::middleware`:
//!   both read the same ambient scope and write the same key, and the
//!   write is idempotent, so the overlap is harmless. The redundancy is
//!   kept so enrichment survives either mechanism being absent in a
//!   given execution context
//! - When the OTel layer is not installed there is no builder to write
//!   to and the layer is a silent no-op (tracing degrades, requests
//!   proceed)

use opentelemetry::KeyValue;
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_opentelemetry::OtelData;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::scope::{RequestScope, GLOBAL_ID_ATTRIBUTE};

/// Layer that attaches `global.id` to every span started under an
/// active request scope.
#[derive(Clone, Debug, Default)]
pub struct CorrelationLayer {
    _private: (),
}

impl CorrelationLayer {
    pub fn new() -> Self {
        CorrelationLayer { _private: () }
    }
}

impl<S> Layer<S> for CorrelationLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(correlation_id) = RequestScope::current_correlation_id() else {
            return;
        };
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut extensions = span.extensions_mut();
        let Some(otel) = extensions.get_mut::<OtelData>() else {
            // No OTel layer below us; nothing to enrich.
            return;
        };

        let attributes = otel.builder.attributes.get_or_insert_with(Vec::new);
        if attributes
            .iter()
            .any(|kv| kv.key.as_str() == GLOBAL_ID_ATTRIBUTE)
        {
            return;
        }
        attributes.push(KeyValue::new(
            GLOBAL_ID_ATTRIBUTE,
            correlation_id.to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use opentelemetry::trace::TracerProvider;
    use opentelemetry_sdk::trace::SdkTracerProvider;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::scope::CorrelationId;

    /// Test layer that records, for every new span, the `global.id`
    /// attribute value left behind by the layers before it.
    struct ProbeLayer(Arc<Mutex<Vec<Option<String>>>>);

    impl<S> Layer<S> for ProbeLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else { return };
            let extensions = span.extensions();
            let value = extensions.get::<OtelData>().and_then(|otel| {
                otel.builder.attributes.as_ref().and_then(|attrs| {
                    attrs
                        .iter()
                        .find(|kv| kv.key.as_str() == GLOBAL_ID_ATTRIBUTE)
                        .map(|kv| kv.value.as_str().into_owned())
                })
            });
            self.0.lock().unwrap().push(value);
        }
    }

    fn probe_subscriber(
        seen: Arc<Mutex<Vec<Option<String>>>>,
    ) -> impl Subscriber + Send + Sync + 'static {
        let provider = SdkTracerProvider::builder().build();
        let tracer = provider.tracer("enrichment-test");
        tracing_subscriber::registry()
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .with(CorrelationLayer::new())
            .with(ProbeLayer(seen))
    }

    #[tokio::test]
    async fn test_spans_inside_scope_carry_global_id() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _guard = tracing::subscriber::set_default(probe_subscriber(seen.clone()));

        RequestScope::new(CorrelationId::from_supplied("req-9").unwrap(), true, None)
            .enter(async {
                let _span = tracing::info_span!("unit_of_work");
            })
            .await;

        let seen = seen.lock().unwrap();
        assert!(seen.contains(&Some("req-9".to_string())));
    }

    #[tokio::test]
    async fn test_spans_outside_scope_are_untouched() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _guard = tracing::subscriber::set_default(probe_subscriber(seen.clone()));

        let _span = tracing::info_span!("background_work");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[None]);
    }
}
