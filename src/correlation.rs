//! Idempotent correlation-id assignment and response propagation.
//!
//! [`ensure_correlation_id`] runs in the pre-phase and guarantees every
//! exchange carries exactly one correlation id on its request side, minting a
//! v4 UUID when the caller supplied none. [`propagate_to_response`] runs in
//! the post-phase and echoes that id onto the response so the caller can join
//! its logs with the gateway's.

use crate::exchange::Exchange;
use crate::headers;

/// Return the exchange's correlation id, generating and attaching one first
/// if the request carries none.
///
/// Calling this twice on the same exchange yields the same id both times. A
/// header value that cannot be read as a string is treated as absent and
/// replaced with a fresh id.
pub fn ensure_correlation_id(exchange: &mut Exchange) -> String {
    if let Some(existing) = headers::correlation_id(exchange.request_headers()) {
        let id = existing.to_owned();
        tracing::debug!(correlation_id = %id, "correlation id found on request");
        return id;
    }

    let id = uuid::Uuid::new_v4().to_string();
    headers::set_correlation_id(exchange.request_headers_mut(), &id);
    tracing::debug!(correlation_id = %id, "correlation id generated");
    id
}

/// Append the correlation id to the response headers.
///
/// Runs once per post-phase invocation; existing response values (e.g. a
/// trace id mirrored under the same name) are kept.
pub fn propagate_to_response(exchange: &mut Exchange, id: &str) {
    tracing::debug!(correlation_id = %id, "adding correlation id to outbound headers");
    headers::append_correlation_id(exchange.response_headers_mut(), id);
}
