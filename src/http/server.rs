//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware in dependency order (trace, timeout, boundary,
//!   enricher)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - The composite propagator lives in `AppState` rather than the OTel
//!   global registry, so routers built in tests behave identically to
//!   the production wiring
//! - The log sink and event publisher are trait objects: the server
//!   only knows it can hand off records and messages

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{GatewayConfig, PropagationConfig};
use crate::http::handlers;
use crate::http::middleware::{enrich_handler_span, propagation_boundary};
use crate::outbound::{EventPublisher, InMemoryPublisher};
use crate::propagation::GatewayPropagator;
use crate::sink::{InMemoryLogSink, LogSink};

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub propagator: Arc<GatewayPropagator>,
    pub sink: Arc<dyn LogSink>,
    pub publisher: Arc<dyn EventPublisher>,
    pub propagation: PropagationConfig,
}

impl AppState {
    /// Assemble state around the given collaborators.
    pub fn new(
        propagation: PropagationConfig,
        sink: Arc<dyn LogSink>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            propagator: Arc::new(GatewayPropagator::new()),
            sink,
            publisher,
            propagation,
        }
    }

    /// State wired entirely to in-memory collaborators.
    pub fn for_tests() -> Self {
        Self::new(
            PropagationConfig::default(),
            Arc::new(InMemoryLogSink::new()),
            Arc::new(InMemoryPublisher::new()),
        )
    }
}

/// HTTP server for the trace gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// in-memory collaborators.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState::new(
            config.propagation.clone(),
            Arc::new(InMemoryLogSink::new()),
            Arc::new(InMemoryPublisher::new()),
        );
        Self::with_state(config, state)
    }

    /// Create a server around pre-built state.
    pub fn with_state(config: GatewayConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layer order is load-bearing: later `.layer()` calls wrap earlier
/// ones, so the boundary middleware (scope + extraction) surrounds the
/// enricher, and the timeout and trace layers surround everything.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .route("/ingest/events", post(handlers::ingest_event))
        .route("/health", get(handlers::health))
        .layer(from_fn_with_state(state.clone(), enrich_handler_span))
        .layer(from_fn_with_state(state.clone(), propagation_boundary))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
