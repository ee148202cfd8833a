//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, filter setup)
//!     → telemetry.rs (tracing-subscriber registry + OTel pipeline)
//!     → enrichment.rs (correlation id stamped on every span)
//!     → metrics.rs (request counters, Prometheus endpoint)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the request span carries the
//!   correlation id as a field so every log line inherits it
//! - OTel export is optional and fails open: a broken exporter degrades
//!   to fmt-only tracing, never a startup failure
//! - The enrichment layer is registered process-wide exactly once

pub mod enrichment;
pub mod logging;
pub mod metrics;
pub mod telemetry;

pub use enrichment::CorrelationLayer;
pub use telemetry::{init, TelemetryGuard};
