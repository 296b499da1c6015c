//! Event sequence of one streaming session.
//!
//! A session emits `ping`, `initializeResponse` and
//! `toolsRegisteredNotification` in that order, then one `ping` per
//! keep-alive period. It ends when the consumer drops the stream (peer
//! disconnect) or the shutdown signal fires, whichever comes first; the
//! timer is owned by the stream and released with it.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use radmcp_protocol::Envelope;

use crate::handler::SessionHandler;

/// Shortest keep-alive period a session will use.
pub const MIN_KEEPALIVE: Duration = Duration::from_secs(1);

/// One item pushed to a streaming client.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Keep-alive.
    Ping,
    /// A protocol envelope.
    Message(Envelope),
}

/// Per-session state threaded through the keep-alive loop.
struct KeepAlive {
    ticker: Interval,
    shutdown: watch::Receiver<bool>,
    shutdown_open: bool,
    _guard: SessionGuard,
}

/// Logs the end of a session however it ends.
struct SessionGuard;

impl Drop for SessionGuard {
    fn drop(&mut self) {
        tracing::debug!("streaming session closed");
    }
}

/// Builds the event stream for a newly opened streaming session.
///
/// `shutdown` ends the session once it holds `true`. A dropped sender
/// means no shutdown will come; the session then runs until dropped.
/// A zero `keepalive` is raised to [`MIN_KEEPALIVE`].
pub fn session_events(
    handler: Arc<SessionHandler>,
    keepalive: Duration,
    shutdown: watch::Receiver<bool>,
) -> impl Stream<Item = SessionEvent> + Send + 'static {
    let [init, ready] = handler.handshake();
    let handshake = stream::iter([
        SessionEvent::Ping,
        SessionEvent::Message(init),
        SessionEvent::Message(ready),
    ]);

    let keepalive = keepalive.max(MIN_KEEPALIVE);
    let mut ticker = interval_at(Instant::now() + keepalive, keepalive);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tracing::debug!(keepalive_secs = keepalive.as_secs(), "streaming session opened");

    let state = KeepAlive {
        ticker,
        shutdown,
        shutdown_open: true,
        _guard: SessionGuard,
    };
    let pings = stream::unfold(state, |mut state| async move {
        if is_set(&state.shutdown) {
            return None;
        }
        loop {
            tokio::select! {
                _ = state.ticker.tick() => return Some((SessionEvent::Ping, state)),
                changed = state.shutdown.changed(), if state.shutdown_open => match changed {
                    Ok(()) if is_set(&state.shutdown) => return None,
                    Ok(()) => {}
                    Err(_) => state.shutdown_open = false,
                },
            }
        }
    });

    handshake.chain(pings)
}

fn is_set(shutdown: &watch::Receiver<bool>) -> bool {
    *shutdown.borrow()
}
