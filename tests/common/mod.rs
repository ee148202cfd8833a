//! Shared harness for integration tests.
//!
//! Builds the production router with in-memory collaborators so tests
//! can drive requests through the full middleware stack and inspect
//! what was persisted and published.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trace_gateway::config::GatewayConfig;
use trace_gateway::http::{build_router, AppState};
use trace_gateway::outbound::InMemoryPublisher;
use trace_gateway::sink::InMemoryLogSink;

pub struct TestApp {
    pub router: Router,
    pub sink: Arc<InMemoryLogSink>,
    pub publisher: Arc<InMemoryPublisher>,
}

impl TestApp {
    pub fn new() -> Self {
        let config = GatewayConfig::default();
        let sink = Arc::new(InMemoryLogSink::new());
        let publisher = Arc::new(InMemoryPublisher::new());
        let state = AppState::new(config.propagation.clone(), sink.clone(), publisher.clone());
        let router = build_router(&config, state);
        Self {
            router,
            sink,
            publisher,
        }
    }

    /// Drive one request through the full layer stack.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
