//! The in-flight request/response pair the pipeline operates on.
//!
//! An [`Exchange`] is created by the router when a request arrives and owned
//! by it for the duration of the call. Filters only read and mutate the two
//! header collections; the body never passes through this crate. Response
//! headers accumulated here are merged into the outbound response by the
//! router after the post-phase completes.

use http::{HeaderMap, Method, Uri};

/// One HTTP call as it flows through the gateway.
#[derive(Debug)]
pub struct Exchange {
    method: Method,
    uri: Uri,
    request_headers: HeaderMap,
    response_headers: HeaderMap,
}

impl Exchange {
    /// Build an exchange from the inbound request line and headers.
    ///
    /// Response headers start empty and are populated by post-filters.
    #[must_use]
    pub fn new(method: Method, uri: Uri, request_headers: HeaderMap) -> Self {
        Self {
            method,
            uri,
            request_headers,
            response_headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    #[must_use]
    pub fn request_headers(&self) -> &HeaderMap {
        &self.request_headers
    }

    pub fn request_headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.request_headers
    }

    #[must_use]
    pub fn response_headers(&self) -> &HeaderMap {
        &self.response_headers
    }

    pub fn response_headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.response_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_headers_start_empty() {
        let mut request = HeaderMap::new();
        request.insert("accept", "application/json".parse().unwrap());

        let exchange = Exchange::new(Method::GET, "/orders".parse().unwrap(), request);

        assert_eq!(exchange.request_headers().len(), 1);
        assert!(exchange.response_headers().is_empty());
    }

    #[test]
    fn header_mutation_is_visible_through_accessors() {
        let mut exchange = Exchange::new(Method::GET, "/".parse().unwrap(), HeaderMap::new());

        exchange
            .response_headers_mut()
            .insert("x-test", "1".parse().unwrap());

        assert_eq!(exchange.response_headers().get("x-test").unwrap(), "1");
    }
}
