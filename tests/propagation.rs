//! End-to-end propagation tests: inbound header precedence, log-record
//! keying, request isolation, and outbound injection.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use uuid::Uuid;

mod common;

use common::TestApp;

const TRACE_ID: &str = "0af7651916cd43dd8448eb211c80319c";
const W3C_TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";
const TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

fn hello_request() -> axum::http::request::Builder {
    Request::builder().method("GET").uri("/api/hello")
}

#[tokio::test]
async fn test_adopted_trace_id_keys_log_record() {
    let app = TestApp::new();

    let response = app
        .send(
            hello_request()
                .header("x-trace-id", TRACE_ID)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let entries = app.sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].correlation_or_trace_id, TRACE_ID);
}

#[tokio::test]
async fn test_supplied_correlation_id_wins_over_adopted_trace() {
    let app = TestApp::new();

    let response = app
        .send(
            hello_request()
                .header("x-trace-id", TRACE_ID)
                .header("x-global-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let entries = app.sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].correlation_or_trace_id, "req-42");
}

#[tokio::test]
async fn test_malformed_trace_id_falls_back_to_supplied_id() {
    let app = TestApp::new();

    let response = app
        .send(
            hello_request()
                .header("x-trace-id", "not-a-trace-id")
                .header("x-global-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let entries = app.sink.entries();
    assert_eq!(entries[0].correlation_or_trace_id, "req-42");
}

#[tokio::test]
async fn test_traceparent_fallback_keys_log_record() {
    let app = TestApp::new();

    let response = app
        .send(
            hello_request()
                .header("traceparent", TRACEPARENT)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let entries = app.sink.entries();
    assert_eq!(entries[0].correlation_or_trace_id, W3C_TRACE_ID);
}

#[tokio::test]
async fn test_custom_header_takes_precedence_over_traceparent() {
    let app = TestApp::new();

    app.send(
        hello_request()
            .header("x-trace-id", TRACE_ID)
            .header("traceparent", TRACEPARENT)
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let entries = app.sink.entries();
    assert_eq!(entries[0].correlation_or_trace_id, TRACE_ID);
}

#[tokio::test]
async fn test_generated_correlation_ids_are_distinct_uuids() {
    let app = TestApp::new();

    app.send(hello_request().body(Body::empty()).unwrap()).await;
    app.send(hello_request().body(Body::empty()).unwrap()).await;

    let entries = app.sink.entries();
    assert_eq!(entries.len(), 2);
    assert_ne!(
        entries[0].correlation_or_trace_id,
        entries[1].correlation_or_trace_id
    );
    for entry in &entries {
        Uuid::parse_str(&entry.correlation_or_trace_id).expect("generated id is a UUID");
    }
}

#[tokio::test]
async fn test_concurrent_requests_keep_disjoint_correlation_ids() {
    let app = TestApp::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            let request = hello_request()
                .header("x-global-id", format!("req-{i}"))
                .body(Body::empty())
                .unwrap();
            let response = tower::ServiceExt::oneshot(router, request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut keys: Vec<String> = app
        .sink
        .entries()
        .into_iter()
        .map(|e| e.correlation_or_trace_id)
        .collect();
    keys.sort();
    let mut expected: Vec<String> = (0..16).map(|i| format!("req-{i}")).collect();
    expected.sort();
    assert_eq!(keys, expected);
}

#[tokio::test]
async fn test_ingest_injects_propagation_headers_onto_message() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/ingest/events")
                .header("content-type", "application/json")
                .header("x-trace-id", TRACE_ID)
                .body(Body::from(r#"{"event":"order-created"}"#))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let messages = app.publisher.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].topic, "ingest-events");
    assert_eq!(
        messages[0].headers.get("x-trace-id").map(String::as_str),
        Some(TRACE_ID)
    );
    // The W3C form travels alongside the proprietary header.
    let traceparent = messages[0].headers.get("traceparent").expect("traceparent");
    assert!(traceparent.contains(TRACE_ID));
    assert_eq!(messages[0].payload, r#"{"event":"order-created"}"#);
}

#[tokio::test]
async fn test_ingest_without_inbound_trace_publishes_bare_message() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/ingest/events")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"event":"order-created"}"#))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let messages = app.publisher.messages();
    assert_eq!(messages.len(), 1);
    // No remote trace and span export is off: nothing valid to inject.
    assert!(!messages[0].headers.contains_key("x-trace-id"));
}

#[tokio::test]
async fn test_ingest_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/ingest/events")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.publisher.messages().is_empty());
}

#[tokio::test]
async fn test_hello_response_body() {
    let app = TestApp::new();

    let response = app.send(hello_request().body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        common::body_string(response).await,
        "Hello from trace-gateway!"
    );
}

#[tokio::test]
async fn test_health_endpoint_leaves_no_log_records() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.sink.entries().is_empty());
}
