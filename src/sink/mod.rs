//! Log record persistence.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → entry.rs (build LogEntry keyed by correlation/trace id)
//!     → LogSink::record (opaque collaborator call)
//!     → memory.rs (in-process store; real deployments plug a database)
//! ```
//!
//! # Design Decisions
//! - The sink is a trait: persistence transport is out of scope, the
//!   core only needs "persist this record" as an opaque call
//! - Sink failures are a distinct handler outcome; they never abort
//!   in-flight propagation teardown

pub mod entry;
pub mod memory;

pub use entry::LogEntry;
pub use memory::InMemoryLogSink;

/// Error raised by a log sink. Non-fatal to propagation: callers log
/// it and decide their own response status.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("log sink unavailable: {0}")]
    Unavailable(String),

    #[error("log record write failed: {0}")]
    Write(String),
}

/// Persists one record per significant request event.
pub trait LogSink: Send + Sync {
    fn record(&self, entry: LogEntry) -> Result<(), SinkError>;
}
