//! Post-filter: correlation-id and trace-id propagation onto the response.

use crate::correlation;
use crate::exchange::Exchange;
use crate::filters::registry::GatewayFilter;
use crate::headers;
use crate::trace::TraceContextBridge;

/// Echoes the request's correlation id into the response headers and, when a
/// span is active, mirrors the trace id next to it under the same header
/// name. Logs the outgoing-request bookend so the gateway's logs show both
/// entry and exit of each call.
pub struct ResponseFilter {
    bridge: TraceContextBridge,
}

impl ResponseFilter {
    #[must_use]
    pub fn new(bridge: TraceContextBridge) -> Self {
        Self { bridge }
    }
}

impl GatewayFilter for ResponseFilter {
    fn name(&self) -> &'static str {
        "response"
    }

    fn run(&self, exchange: &mut Exchange) {
        // The pre-filter ran before dispatch, so the request side normally
        // carries an id already; a fresh one is minted only if the post-phase
        // is driven on an exchange that skipped the pre-phase.
        let correlation_id = match headers::correlation_id(exchange.request_headers()) {
            Some(id) => id.to_owned(),
            None => correlation::ensure_correlation_id(exchange),
        };
        correlation::propagate_to_response(exchange, &correlation_id);

        if let Some(trace_id) = self.bridge.current_trace_id() {
            self.bridge.attach_to_response(exchange, &trace_id);
        }

        tracing::debug!(
            correlation_id = %correlation_id,
            uri = %exchange.uri(),
            "completing outgoing request"
        );
    }
}
