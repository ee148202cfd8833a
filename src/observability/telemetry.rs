//! Tracing subscriber and OpenTelemetry pipeline initialization.
//!
//! Sets up a `tracing_subscriber` registry combining the fmt layer, an
//! optional OpenTelemetry layer backed by an OTLP exporter, and the
//! correlation enrichment layer. Also registers the composite
//! propagator as the process-wide text map propagator; this is the
//! one place where propagation is wired, configured once at startup
//! and read-only thereafter.

use std::time::Duration;

use opentelemetry::trace::TracerProvider;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{BatchSpanProcessor, Sampler, SdkTracerProvider};
use opentelemetry_sdk::Resource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{GatewayConfig, TelemetryConfig};
use crate::observability::enrichment::CorrelationLayer;
use crate::observability::logging;
use crate::propagation::GatewayPropagator;

/// Opaque handle returned by [`init`]. Dropping it is a no-op; call
/// [`TelemetryGuard::shutdown`] for a clean flush of pending spans.
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    /// Flush pending spans and shut down the exporter.
    pub fn shutdown(mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                tracing::warn!(error = %e, "OpenTelemetry tracer provider shutdown failed");
            }
        }
    }
}

/// Initialize the tracing subscriber and the global propagator.
///
/// When `config.telemetry.enabled` is true, a combined fmt +
/// OpenTelemetry subscriber is installed. When disabled, or when the
/// OTLP exporter fails to build, the service runs with fmt-only
/// tracing; propagation and enrichment still work, only export is off.
pub fn init(config: &GatewayConfig) -> TelemetryGuard {
    // Custom X-Trace-Id scheme first, W3C fallback. Outbound
    // integrations that consult the global propagator get the same
    // precedence as the boundary middleware.
    global::set_text_map_propagator(GatewayPropagator::new());

    let env_filter = logging::env_filter(&config.observability.log_filter);
    let fmt_layer = tracing_subscriber::fmt::layer();

    let mut exporter_error = None;
    let (otel_layer, provider) = if config.telemetry.enabled {
        match build_exporter(&config.telemetry) {
            Ok(exporter) => {
                let provider = build_provider(&config.telemetry, exporter);
                global::set_tracer_provider(provider.clone());

                let tracer = provider.tracer("trace-gateway");
                let layer = tracing_opentelemetry::layer().with_tracer(tracer);
                (Some(layer), Some(provider))
            }
            Err(e) => {
                exporter_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    // The enrichment layer must come after the OTel layer so the span's
    // attribute set exists by the time it runs.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .with(CorrelationLayer::new())
        .init();

    if let Some(e) = exporter_error {
        tracing::error!(
            error = %e,
            endpoint = %config.telemetry.endpoint,
            protocol = %config.telemetry.protocol,
            "failed to build OTLP exporter, falling back to fmt-only tracing"
        );
    }

    TelemetryGuard { provider }
}

fn build_provider(
    config: &TelemetryConfig,
    exporter: opentelemetry_otlp::SpanExporter,
) -> SdkTracerProvider {
    let resource = Resource::builder()
        .with_attributes(vec![
            KeyValue::new("service.name", config.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ])
        .build();

    let sampler = if (config.sample_ratio - 1.0).abs() < f64::EPSILON {
        Sampler::AlwaysOn
    } else if config.sample_ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(config.sample_ratio)
    };

    SdkTracerProvider::builder()
        .with_span_processor(BatchSpanProcessor::builder(exporter).build())
        .with_sampler(sampler)
        .with_resource(resource)
        .build()
}

/// Build the OTLP span exporter based on the configured protocol.
fn build_exporter(
    config: &TelemetryConfig,
) -> Result<opentelemetry_otlp::SpanExporter, opentelemetry::trace::TraceError> {
    let timeout = Duration::from_secs(config.timeout_seconds);

    match config.protocol.as_str() {
        "http" => opentelemetry_otlp::SpanExporter::builder()
            .with_http()
            .with_endpoint(&config.endpoint)
            .with_timeout(timeout)
            .build(),
        _ => opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&config.endpoint)
            .with_timeout(timeout)
            .build(),
    }
}
