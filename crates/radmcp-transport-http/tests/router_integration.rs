//! Integration tests for the HTTP router.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use futures::StreamExt;
use http::{header, Request};
use serde_json::{json, Value};
use tokio::sync::watch;
use tower::ServiceExt;

use radmcp_executor::CommandExecutor;
use radmcp_registry::{radius_catalog, RadBinary};
use radmcp_session::SessionHandler;
use radmcp_transport_http::{build_router, AppState};

fn make_state() -> (AppState, watch::Sender<bool>) {
    let rad = RadBinary {
        path: "echo".into(),
        available: true,
    };
    let executor = CommandExecutor::new(Arc::new(radius_catalog(&rad)));
    let (tx, rx) = watch::channel(false);
    let state = AppState {
        handler: Arc::new(SessionHandler::new(executor)),
        keepalive: Duration::from_secs(15),
        shutdown: rx,
    };
    (state, tx)
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("req")
}

async fn body_text(resp: axum::response::Response) -> String {
    let body = axum::body::to_bytes(resp.into_body(), 1 << 20)
        .await
        .expect("body");
    String::from_utf8(body.to_vec()).expect("utf8")
}

#[tokio::test]
async fn health_returns_ok() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).await.contains("radmcp"));
}

#[tokio::test]
async fn initialize_over_post() {
    for uri in ["/mcp", "/mcp2"] {
        let (state, _tx) = make_state();
        let body = json!({"version": "0.1", "messageType": "initializeRequest", "message": {}});
        let resp = build_router(state)
            .oneshot(post(uri, body.to_string()))
            .await
            .expect("resp");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).expect("ct"),
            "application/json"
        );
        let reply: Value = serde_json::from_str(&body_text(resp).await).expect("json");
        assert_eq!(reply["messageType"], "initializeResponse");
        assert_eq!(reply["message"]["protocolVersion"], "0.1");
        assert!(!reply["message"]["tools"].as_array().expect("tools").is_empty());
    }
}

#[tokio::test]
async fn tool_call_over_post() {
    let (state, _tx) = make_state();
    let body = json!({
        "version": "0.1",
        "messageType": "toolCallRequest",
        "message": {"toolCalls": [
            {"toolCallId": "1", "name": "radius_version", "parameters": {}},
            {"toolCallId": "2", "name": "radius_unknown", "parameters": {}}
        ]}
    });
    let resp = build_router(state)
        .oneshot(post("/mcp", body.to_string()))
        .await
        .expect("resp");
    assert_eq!(resp.status(), 200);
    let reply: Value = serde_json::from_str(&body_text(resp).await).expect("json");
    let results = &reply["message"]["toolCallResponses"];
    assert_eq!(results[0]["toolCallId"], "1");
    assert_eq!(results[0]["results"]["output"], "version\n");
    assert_eq!(results[1]["toolCallId"], "2");
    assert!(results[1]["error"].is_string());
}

#[tokio::test]
async fn invalid_json_is_plain_400() {
    let (state, _tx) = make_state();
    let resp = build_router(state)
        .oneshot(post("/mcp", "not json"))
        .await
        .expect("resp");
    assert_eq!(resp.status(), 400);
    let text = body_text(resp).await;
    assert!(text.contains("invalid JSON"));
    assert!(serde_json::from_str::<Value>(&text).is_err());
}

#[tokio::test]
async fn unknown_message_type_is_400() {
    let (state, _tx) = make_state();
    let body = json!({"version": "0.1", "messageType": "toolCallResponse", "message": {}});
    let resp = build_router(state)
        .oneshot(post("/mcp", body.to_string()))
        .await
        .expect("resp");
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn options_is_empty_200() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/mcp")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).await.is_empty());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/mcp")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin"),
        "*"
    );
}

#[tokio::test]
async fn other_methods_are_405() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .method("PUT")
        .uri("/mcp")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn stream_refused_without_event_stream_accept() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .uri("/mcp")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 406);
    assert!(body_text(resp).await.starts_with("streaming unsupported"));
}

#[tokio::test]
async fn stream_opens_with_handshake() {
    let (state, _tx) = make_state();
    let req = Request::builder()
        .uri("/mcp2")
        .header(header::ACCEPT, "text/event-stream")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).expect("ct"),
        "text/event-stream"
    );
    assert_eq!(resp.headers().get("x-accel-buffering").expect("xab"), "no");

    let mut body = resp.into_body().into_data_stream();
    let mut text = String::new();
    while text.matches("\n\n").count() < 3 {
        let chunk = tokio::time::timeout(Duration::from_secs(5), body.next())
            .await
            .expect("handshake arrives before the first keep-alive")
            .expect("stream open")
            .expect("chunk");
        text.push_str(std::str::from_utf8(&chunk).expect("utf8"));
    }

    let events: Vec<&str> = text
        .lines()
        .filter_map(|l| l.strip_prefix("event: "))
        .collect();
    assert_eq!(
        events,
        vec!["ping", "initializeResponse", "toolsRegisteredNotification"]
    );
    assert!(text.contains("data: {}\n"));
    assert!(text.contains(r#""status":"ready""#));
}

#[tokio::test]
async fn shutdown_ends_open_streams() {
    let (state, tx) = make_state();
    let req = Request::builder()
        .uri("/mcp")
        .header(header::ACCEPT, "*/*")
        .body(Body::empty())
        .expect("req");
    let resp = build_router(state).oneshot(req).await.expect("resp");
    tx.send(true).expect("receiver alive");

    let text = tokio::time::timeout(Duration::from_secs(5), body_text(resp))
        .await
        .expect("stream ends on shutdown");
    assert_eq!(text.matches("event: ").count(), 3);
}
