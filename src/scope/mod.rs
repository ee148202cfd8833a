//! Per-request ambient scope.
//!
//! # Data Flow
//! ```text
//! Boundary middleware
//!     → correlation.rs (read X-Global-ID or generate UUID v4)
//!     → request_scope.rs (bind id + trace context, task-local)
//!     → handlers / enrichers read the scope at any depth
//!     → scope dropped with the request future (all exit paths)
//! ```
//!
//! # Design Decisions
//! - Task-local storage instead of thread-local: the request future may
//!   migrate across worker threads, the scope must follow it
//! - Only the boundary middleware creates or tears down a scope;
//!   everything else is a reader

pub mod correlation;
pub mod request_scope;

pub use correlation::CorrelationId;
pub use request_scope::RequestScope;

/// Inbound header supplying a caller-chosen correlation identifier.
pub const GLOBAL_ID_HEADER: &str = "x-global-id";

/// Low-cardinality span attribute (and baggage key) carrying the
/// correlation identifier. Both enrichment paths write this same key.
pub const GLOBAL_ID_ATTRIBUTE: &str = "global.id";
