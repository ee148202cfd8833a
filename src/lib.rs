//! Trace gateway: context propagation for distributed request tracing.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 TRACE GATEWAY                  │
//!                      │                                                │
//!   Client Request     │  ┌─────────────┐   ┌──────────────────────┐   │
//!   ──────────────────▶│  │ propagation │──▶│  scope (task-local   │   │
//!   X-Trace-Id /       │  │  composite  │   │  correlation + trace │   │
//!   traceparent /      │  │  extraction │   │  context binding)    │   │
//!   X-Global-ID        │  └─────────────┘   └──────────┬───────────┘   │
//!                      │                               │               │
//!                      │                               ▼               │
//!                      │  ┌─────────────┐   ┌──────────────────────┐   │
//!   Client Response    │  │  outbound   │◀──│       handlers       │   │
//!   ◀──────────────────│  │  inject +   │   │  (log records keyed  │   │
//!                      │  │  publish    │   │  by correlation id)  │   │
//!                      │  └─────────────┘   └──────────────────────┘   │
//!                      │                                                │
//!                      │  ┌──────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns           │ │
//!                      │  │  ┌────────┐ ┌─────────────────────────┐  │ │
//!                      │  │  │ config │ │ observability (span     │  │ │
//!                      │  │  │        │ │ enrichment, OTLP export, │  │ │
//!                      │  │  └────────┘ │ metrics, logging)        │  │ │
//!                      │  │             └─────────────────────────┘  │ │
//!                      │  └──────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod propagation;
pub mod scope;

// Collaborators behind trait seams
pub mod outbound;
pub mod sink;

// Cross-cutting concerns
pub mod observability;
