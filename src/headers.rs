//! Canonical header names and typed accessors.
//!
//! Every filter goes through these helpers so the correlation header name
//! exists in exactly one place. `HeaderMap` stores values as opaque bytes;
//! the getters surface only values that are readable as visible ASCII and
//! treat anything else as absent.

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the per-exchange correlation id, on both the request and
/// the response side.
pub const CORRELATION_ID: HeaderName = HeaderName::from_static("tmx-correlation-id");

/// First correlation-id value on the given headers, if readable.
#[must_use]
pub fn correlation_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(&CORRELATION_ID).and_then(|v| v.to_str().ok())
}

/// Set the correlation id, replacing any existing value.
pub fn set_correlation_id(headers: &mut HeaderMap, id: &str) {
    if let Ok(value) = HeaderValue::from_str(id) {
        headers.insert(CORRELATION_ID, value);
    }
}

/// Append a correlation-header value, keeping any values already present.
pub fn append_correlation_id(headers: &mut HeaderMap, id: &str) {
    if let Ok(value) = HeaderValue::from_str(id) {
        headers.append(CORRELATION_ID, value);
    }
}

/// Raw `Authorization` header value, if readable.
#[must_use]
pub fn auth_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}
