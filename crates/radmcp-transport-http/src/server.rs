//! HTTP server that binds the router to a TCP socket.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;

use radmcp_session::SessionHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the gateway.
pub struct HttpServer {
    pub(crate) addr: String,
    pub(crate) handler: Arc<SessionHandler>,
    pub(crate) keepalive: Duration,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `handler` - shared session handler
    /// * `host` - interface or host name to bind
    /// * `port` - TCP port to listen on
    /// * `keepalive` - ping interval for event streams
    pub fn new(
        handler: Arc<SessionHandler>,
        host: impl Into<String>,
        port: u16,
        keepalive: Duration,
    ) -> Self {
        Self {
            addr: format!("{}:{port}", host.into()),
            handler,
            keepalive,
        }
    }

    /// Starts the server and blocks until `shutdown` resolves and every
    /// connection has drained. Open event streams are ended as soon as
    /// `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener =
            TcpListener::bind(&self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.clone(),
                    source: e,
                })?;
        let local = listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| self.addr.clone());
        tracing::info!(addr = %local, "radmcp HTTP server ready");

        let (stop_tx, stop_rx) = watch::channel(false);
        let router = build_router(AppState {
            handler: self.handler,
            keepalive: self.keepalive,
            shutdown: stop_rx,
        });

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("shutdown requested, closing streams");
                let _ = stop_tx.send(true);
            })
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        tracing::info!("radmcp HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radmcp_executor::CommandExecutor;
    use radmcp_registry::{radius_catalog, RadBinary};

    fn make_handler() -> Arc<SessionHandler> {
        let executor = CommandExecutor::new(Arc::new(radius_catalog(&RadBinary::missing())));
        Arc::new(SessionHandler::new(executor))
    }

    #[test]
    fn new_joins_host_and_port() {
        let server = HttpServer::new(make_handler(), "127.0.0.1", 3000, Duration::from_secs(15));
        assert_eq!(server.addr, "127.0.0.1:3000");
        assert_eq!(server.keepalive, Duration::from_secs(15));
    }

    #[tokio::test]
    async fn run_returns_after_shutdown() {
        let server = HttpServer::new(make_handler(), "127.0.0.1", 0, Duration::from_secs(15));
        server
            .run(std::future::ready(()))
            .await
            .expect("clean shutdown");
    }

    #[tokio::test]
    async fn occupied_port_is_a_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = taken.local_addr().expect("addr").port();
        let server = HttpServer::new(make_handler(), "127.0.0.1", port, Duration::from_secs(15));
        let err = server
            .run(std::future::ready(()))
            .await
            .expect_err("port in use");
        assert!(matches!(err, HttpTransportError::Bind { .. }));
    }
}
