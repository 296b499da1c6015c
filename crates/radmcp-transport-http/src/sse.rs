//! Server-sent event framing for streaming sessions.

use axum::http::{header, HeaderMap};
use axum::response::sse::Event;

use radmcp_protocol::events;
use radmcp_session::SessionEvent;

use crate::error::HttpTransportError;

/// Header disabling response buffering in reverse proxies.
pub const ACCEL_BUFFERING: &str = "x-accel-buffering";

/// Checks that the client can receive an event stream.
///
/// A missing `Accept` header is treated as accepting anything.
///
/// # Errors
///
/// Returns `StreamingUnsupported` when `Accept` lists neither
/// `text/event-stream` nor a matching wildcard.
pub fn check_accept(headers: &HeaderMap) -> Result<(), HttpTransportError> {
    let Some(accept) = headers.get(header::ACCEPT) else {
        return Ok(());
    };
    let accept = accept
        .to_str()
        .map_err(|_| HttpTransportError::StreamingUnsupported)?;
    let streams = accept.split(',').any(|range| {
        let media = range.split(';').next().unwrap_or("").trim();
        media.eq_ignore_ascii_case("text/event-stream")
            || media.eq_ignore_ascii_case("text/*")
            || media == "*/*"
    });
    if streams {
        Ok(())
    } else {
        Err(HttpTransportError::StreamingUnsupported)
    }
}

/// Frames one session event: envelopes go out under their message
/// type, keep-alives as `ping` with an empty object.
///
/// # Errors
///
/// Returns the serde error if the envelope cannot be encoded.
pub fn to_event(event: SessionEvent) -> Result<Event, serde_json::Error> {
    match event {
        SessionEvent::Ping => Ok(Event::default()
            .event(events::PING)
            .data(events::PING_DATA)),
        SessionEvent::Message(envelope) => {
            let data = envelope.to_json()?;
            Ok(Event::default()
                .event(envelope.message_type().as_str())
                .data(data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn event_stream_accepted() {
        assert!(check_accept(&accept("text/event-stream")).is_ok());
        assert!(check_accept(&accept("application/json, text/event-stream;q=0.9")).is_ok());
    }

    #[test]
    fn wildcards_accepted() {
        assert!(check_accept(&accept("*/*")).is_ok());
        assert!(check_accept(&accept("text/*")).is_ok());
        assert!(check_accept(&HeaderMap::new()).is_ok());
    }

    #[test]
    fn json_only_rejected() {
        assert!(matches!(
            check_accept(&accept("application/json")),
            Err(HttpTransportError::StreamingUnsupported)
        ));
    }
}
