//! Ordered pre/post filter registration — the router collaborator contract.
//!
//! A strategy list, not a dispatch framework: the registry holds two ordered
//! lists of named filters and exposes one run method per phase for the router
//! to call. It is built once at startup, then only read, so a multi-threaded
//! router can share it behind an `Arc`.

use crate::exchange::Exchange;

/// A filter invoked once per exchange in its phase.
///
/// Filters mutate the exchange's header collections in place. They must not
/// block the router's completion signal and must not fail the exchange: every
/// internal failure degrades to a safe default instead of propagating.
pub trait GatewayFilter: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, exchange: &mut Exchange);
}

struct Registration {
    order: i32,
    filter: Box<dyn GatewayFilter>,
}

/// Ordered pre-dispatch and post-dispatch filter lists.
#[derive(Default)]
pub struct FilterRegistry {
    pre: Vec<Registration>,
    post: Vec<Registration>,
}

impl FilterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter to run before route resolution. Lower orders run
    /// first; filters sharing an order run in registration order.
    pub fn register_pre_filter(&mut self, order: i32, filter: impl GatewayFilter + 'static) {
        Self::insert(&mut self.pre, order, Box::new(filter));
    }

    /// Register a filter to run after the backend response is available and
    /// before it is transmitted to the caller.
    pub fn register_post_filter(&mut self, order: i32, filter: impl GatewayFilter + 'static) {
        Self::insert(&mut self.post, order, Box::new(filter));
    }

    fn insert(list: &mut Vec<Registration>, order: i32, filter: Box<dyn GatewayFilter>) {
        // Stable for equal orders: insert after the last entry with order <= new.
        let at = list.partition_point(|r| r.order <= order);
        list.insert(at, Registration { order, filter });
    }

    /// Run the pre-phase for one exchange.
    pub fn run_pre(&self, exchange: &mut Exchange) {
        for registration in &self.pre {
            tracing::trace!(filter = registration.filter.name(), "running pre-filter");
            registration.filter.run(exchange);
        }
    }

    /// Run the post-phase for one exchange.
    pub fn run_post(&self, exchange: &mut Exchange) {
        for registration in &self.post {
            tracing::trace!(filter = registration.filter.name(), "running post-filter");
            registration.filter.run(exchange);
        }
    }
}
