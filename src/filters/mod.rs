//! Ordered filter registration and the two built-in filters.
//!
//! The router drives the chain: it calls
//! [`FilterRegistry::run_pre`](registry::FilterRegistry::run_pre) before
//! resolving a route and [`FilterRegistry::run_post`](registry::FilterRegistry::run_post)
//! once the backend response is available, before the response is
//! transmitted. Within each phase, filters run in ascending registration
//! order.
//!
//! - [`TrackingFilter`](tracking::TrackingFilter) (pre, order 1) assigns the
//!   correlation id and logs the caller identity.
//! - [`ResponseFilter`](response::ResponseFilter) (post, order 1) propagates
//!   the correlation id and the active trace id onto the response.

pub mod registry;
pub mod response;
pub mod tracking;

use std::sync::Arc;

pub use registry::{FilterRegistry, GatewayFilter};
pub use response::ResponseFilter;
pub use tracking::TrackingFilter;

use crate::trace::{TraceContextBridge, Tracer};

/// Registration order of [`TrackingFilter`]; first among pre-filters so every
/// later filter and, in principle, the backend itself can observe the
/// correlation header.
pub const TRACKING_FILTER_ORDER: i32 = 1;

/// Registration order of [`ResponseFilter`].
pub const RESPONSE_FILTER_ORDER: i32 = 1;

/// Install the built-in filters at their canonical orders.
pub fn register_filters(registry: &mut FilterRegistry, tracer: Arc<dyn Tracer>) {
    registry.register_pre_filter(TRACKING_FILTER_ORDER, TrackingFilter);
    registry.register_post_filter(
        RESPONSE_FILTER_ORDER,
        ResponseFilter::new(TraceContextBridge::new(tracer)),
    );
}
