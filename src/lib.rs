//! Tracegate is the cross-cutting filter pipeline of an HTTP gateway.
//!
//! It intercepts every inbound exchange before the router dispatches it to a
//! backend and every outbound response before it reaches the caller, to
//! attach a stable correlation identifier, extract caller-identity metadata
//! from a bearer token for logging, and mirror distributed-tracing context
//! into response headers. Routing, service discovery, and the server itself
//! live in the embedding gateway; this crate only reads and writes the
//! exchange's header collections.
//!
//! # Architecture
//!
//! - [`exchange`] -- The [`Exchange`](exchange::Exchange) flowing through the
//!   pipeline: method, URI, and the request/response header collections.
//! - [`headers`] -- Canonical header names and typed accessors over
//!   `http::HeaderMap`.
//! - [`correlation`] -- Idempotent correlation-id assignment and response
//!   propagation.
//! - [`identity`] -- Bearer-token payload decoding and display-name claim
//!   extraction, degrading silently on malformed input.
//! - [`trace`] -- The [`Tracer`](trace::Tracer) collaborator trait and the
//!   bridge that mirrors the active trace id into response headers.
//! - [`filters`] -- The ordered pre/post filter registry the router drives,
//!   plus the two built-in filters.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print
//!   output, for binaries embedding the pipeline.
//!
//! # Wiring
//!
//! The embedding router builds a [`FilterRegistry`](filters::FilterRegistry)
//! at startup, installs the built-in filters with
//! [`register_filters`](filters::register_filters), and then calls
//! [`run_pre`](filters::FilterRegistry::run_pre) before route resolution and
//! [`run_post`](filters::FilterRegistry::run_post) once the backend response
//! is available, for each exchange.

// Filters never fail an exchange, so the public surface is Result-free.
#![allow(clippy::missing_errors_doc)]

pub mod correlation;
pub mod exchange;
pub mod filters;
pub mod headers;
pub mod identity;
pub mod logging;
pub mod trace;

pub use exchange::Exchange;
pub use filters::{register_filters, FilterRegistry, GatewayFilter};
pub use trace::{NoopTracer, SpanContext, Tracer};
