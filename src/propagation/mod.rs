//! Trace context propagation subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request headers
//!     → composite.rs (custom scheme first, W3C fallback)
//!     → context.rs (shape validation, lossy adoption)
//!     → extracted Context handed to the boundary middleware
//!
//! Outbound carrier (event headers, upstream calls)
//!     ← composite.rs inject (X-Trace-Id + delegated traceparent)
//! ```
//!
//! # Design Decisions
//! - Two independent schemes compose with defined precedence: the
//!   proprietary `X-Trace-Id` header wins when present and valid, the
//!   W3C `traceparent`/`tracestate` pair is the fallback
//! - Malformed headers are treated as absent, never as errors
//! - The W3C propagator is the SDK implementation, invoked as-is

pub mod carrier;
pub mod composite;
pub mod context;
pub mod custom;

pub use carrier::{HeaderExtractor, MapExtractor, MapInjector};
pub use composite::GatewayPropagator;
pub use custom::TraceIdPropagator;

/// Proprietary single-header scheme: carries only a trace identifier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// W3C Trace Context headers, owned by the delegated standard propagator.
pub const TRACEPARENT_HEADER: &str = "traceparent";
pub const TRACESTATE_HEADER: &str = "tracestate";
