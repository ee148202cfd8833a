//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from
//! config files, and every section has defaults so a minimal (or empty)
//! config file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the trace gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Propagation behavior (remote service labeling).
    pub propagation: PropagationConfig,

    /// OpenTelemetry export settings.
    pub telemetry: TelemetryConfig,

    /// Metrics and log-filter settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Propagation behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Service name attributed to requests arriving without any trace
    /// headers (un-instrumented external clients), so the service
    /// dependency graph shows the edge correctly.
    pub remote_service_name: String,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            remote_service_name: "untraced-client".to_string(),
        }
    }
}

/// OpenTelemetry export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// When false, only the fmt subscriber is installed (zero
    /// OpenTelemetry overhead); header propagation still works.
    pub enabled: bool,

    /// OTLP collector endpoint.
    pub endpoint: String,

    /// "grpc" or "http".
    pub protocol: String,

    /// service.name resource attribute.
    pub service_name: String,

    /// Head sampling ratio in [0.0, 1.0].
    pub sample_ratio: f64,

    /// Export timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://127.0.0.1:4317".to_string(),
            protocol: "grpc".to_string(),
            service_name: "trace-gateway".to_string(),
            sample_ratio: 1.0,
            timeout_seconds: 10,
        }
    }
}

/// Metrics and log-filter settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,

    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
            log_filter: "trace_gateway=debug,tower_http=info".to_string(),
        }
    }
}
