//! Axum router for the HTTP transport.
//! Routes: `/mcp` and `/mcp2` (`GET` stream, `POST` exchange, `OPTIONS`),
//! `GET /health` (liveness).

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{sse::Sse, IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use futures::StreamExt;
use serde_json::json;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use radmcp_session::{session_events, SessionHandler};
use radmcp_types::{ErrorKind, GatewayError};

use crate::sse;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The protocol session handler.
    pub handler: Arc<SessionHandler>,
    /// Interval between keep-alive pings on a stream.
    pub keepalive: Duration,
    /// Flips to `true` when the server is shutting down.
    pub shutdown: watch::Receiver<bool>,
}

/// Builds the axum `Router` with all gateway routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", endpoint())
        .route("/mcp2", endpoint())
        .route("/health", get(handle_health))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn endpoint() -> MethodRouter<AppState> {
    get(handle_stream).post(handle_post).options(handle_options)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "radmcp"}))
}

async fn handle_options() -> StatusCode {
    StatusCode::OK
}

async fn handle_post(State(state): State<AppState>, body: String) -> Response {
    let reply = match state.handler.handle_json(&body).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "rejected request");
            return error_response(e.into());
        }
    };
    match reply.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => error_response(GatewayError::new(ErrorKind::Internal, e.to_string())),
    }
}

async fn handle_stream(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(e) = sse::check_accept(&headers) {
        warn!(error = %e, "refusing event stream");
        return error_response(e.into());
    }
    let events =
        session_events(state.handler, state.keepalive, state.shutdown).map(sse::to_event);
    ([(sse::ACCEL_BUFFERING, "no")], Sse::new(events)).into_response()
}

/// Plain-text error reply; the status follows the error kind.
fn error_response(err: GatewayError) -> Response {
    (status_for(&err.kind), err.message).into_response()
}

fn status_for(kind: &ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unsupported => StatusCode::NOT_ACCEPTABLE,
        ErrorKind::ExecutionFailed => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
