//! Bridge between the gateway's tracing subsystem and outbound headers.
//!
//! The tracer is a collaborator owned by the embedding gateway; the pipeline
//! only asks it for the currently active span. When one exists, its trace id
//! is mirrored into the response under the correlation header name, next to
//! the correlation id value, so callers can join both identifier spaces. A
//! disabled or unavailable tracer is not an error — the bridge simply does
//! nothing for that exchange.

use std::sync::Arc;

use crate::exchange::Exchange;
use crate::headers;

/// Context of an active span, as exposed by the tracer collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanContext {
    pub trace_id: String,
}

/// Handle to the gateway's tracing subsystem.
///
/// Injected into [`TraceContextBridge`] at construction; implementations
/// typically read ambient per-call state maintained by the tracing backend.
pub trait Tracer: Send + Sync {
    /// The span covering the current exchange, if tracing is active.
    fn current_span(&self) -> Option<SpanContext>;
}

/// Tracer for gateways that run without a tracing backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn current_span(&self) -> Option<SpanContext> {
        None
    }
}

/// Mirrors the active trace id into response headers.
pub struct TraceContextBridge {
    tracer: Arc<dyn Tracer>,
}

impl TraceContextBridge {
    #[must_use]
    pub fn new(tracer: Arc<dyn Tracer>) -> Self {
        Self { tracer }
    }

    /// Trace id of the current span, absent when no span is active.
    #[must_use]
    pub fn current_trace_id(&self) -> Option<String> {
        self.tracer.current_span().map(|ctx| ctx.trace_id)
    }

    /// Append the trace id to the response headers under the correlation
    /// header name, alongside the correlation id value.
    pub fn attach_to_response(&self, exchange: &mut Exchange, trace_id: &str) {
        tracing::debug!(trace_id = %trace_id, "adding trace id to outbound headers");
        headers::append_correlation_id(exchange.response_headers_mut(), trace_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method};

    struct FixedTracer(&'static str);

    impl Tracer for FixedTracer {
        fn current_span(&self) -> Option<SpanContext> {
            Some(SpanContext {
                trace_id: self.0.to_owned(),
            })
        }
    }

    fn empty_exchange() -> Exchange {
        Exchange::new(Method::GET, "/".parse().unwrap(), HeaderMap::new())
    }

    #[test]
    fn noop_tracer_yields_no_trace_id() {
        let bridge = TraceContextBridge::new(Arc::new(NoopTracer));

        assert_eq!(bridge.current_trace_id(), None);
    }

    #[test]
    fn active_span_yields_its_trace_id() {
        let bridge = TraceContextBridge::new(Arc::new(FixedTracer("trace-9f2")));

        assert_eq!(bridge.current_trace_id(), Some("trace-9f2".to_owned()));
    }

    #[test]
    fn attach_appends_next_to_existing_values() {
        let bridge = TraceContextBridge::new(Arc::new(FixedTracer("trace-9f2")));
        let mut exchange = empty_exchange();
        headers::append_correlation_id(exchange.response_headers_mut(), "abc-123");

        bridge.attach_to_response(&mut exchange, "trace-9f2");

        let values: Vec<_> = exchange
            .response_headers()
            .get_all(&headers::CORRELATION_ID)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, ["abc-123", "trace-9f2"]);
    }
}
