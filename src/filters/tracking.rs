//! Pre-filter: correlation-id assignment and identity logging.

use crate::correlation;
use crate::exchange::Exchange;
use crate::filters::registry::GatewayFilter;
use crate::identity;

/// Runs first among pre-filters on every exchange.
///
/// Ensures the request carries a correlation id, then decodes the caller's
/// display name from the bearer token for the log record only — the name is
/// never stored on the exchange or forwarded downstream. The identity is an
/// unvalidated caller-supplied value, so it is logged at debug rather than
/// info to keep it out of default production logs.
pub struct TrackingFilter;

impl GatewayFilter for TrackingFilter {
    fn name(&self) -> &'static str {
        "tracking"
    }

    fn run(&self, exchange: &mut Exchange) {
        let correlation_id = correlation::ensure_correlation_id(exchange);
        let display_name = identity::extract_display_name(exchange.request_headers());

        tracing::debug!(
            correlation_id = %correlation_id,
            display_name = %display_name,
            method = %exchange.method(),
            uri = %exchange.uri(),
            "incoming request tracked"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers;
    use http::{HeaderMap, Method};

    #[test]
    fn attaches_correlation_id_to_request() {
        let mut exchange = Exchange::new(Method::GET, "/orders".parse().unwrap(), HeaderMap::new());

        TrackingFilter.run(&mut exchange);

        let id = headers::correlation_id(exchange.request_headers()).unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn preserves_caller_supplied_id() {
        let mut request = HeaderMap::new();
        request.insert(&headers::CORRELATION_ID, "abc-123".parse().unwrap());
        let mut exchange = Exchange::new(Method::GET, "/orders".parse().unwrap(), request);

        TrackingFilter.run(&mut exchange);

        assert_eq!(
            headers::correlation_id(exchange.request_headers()),
            Some("abc-123")
        );
    }

    #[test]
    fn malformed_token_does_not_disturb_the_exchange() {
        let mut request = HeaderMap::new();
        request.insert(
            http::header::AUTHORIZATION,
            "Bearer not.a-real.token".parse().unwrap(),
        );
        let mut exchange = Exchange::new(Method::GET, "/orders".parse().unwrap(), request);

        TrackingFilter.run(&mut exchange);

        // Correlation id still assigned; nothing else written.
        assert!(headers::correlation_id(exchange.request_headers()).is_some());
        assert!(exchange.response_headers().is_empty());
    }
}
