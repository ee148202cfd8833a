//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (router + layer stack)
//!     → middleware/boundary.rs (correlation id, extraction, scope)
//!     → middleware/enrich.rs (span labeling around dispatch)
//!     → handlers.rs (log record, event publishing)
//!     → response (scope released with the request future)
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{build_router, AppState, HttpServer};
