//! Request middleware chain.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → boundary.rs   (outermost: correlation id, extraction, scope)
//!     → enrich.rs     (inner: remote-service label, span tagging)
//!     → handler
//! ```
//!
//! Ordering matters: the boundary middleware must have created the
//! request span and bound the scope before the enricher runs, and the
//! scope must outlive everything the handler awaits.

pub mod boundary;
pub mod enrich;

pub use boundary::propagation_boundary;
pub use enrich::enrich_handler_span;
