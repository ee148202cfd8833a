//! Outbound event publishing.
//!
//! # Data Flow
//! ```text
//! Ingest handler
//!     → composite propagator injects headers into the carrier
//!     → EventPublisher::publish (opaque collaborator call)
//!     → memory.rs keeps the message for inspection; real deployments
//!       plug a queue client here
//! ```
//!
//! Message-queue transport mechanics are out of scope; the core only
//! needs "send this message" with a header carrier it can inject into.

pub mod publisher;

pub use publisher::{EventPublisher, InMemoryPublisher, OutboundMessage, PublishError};

/// Topic the ingest endpoint publishes to.
pub const INGEST_TOPIC: &str = "ingest-events";
