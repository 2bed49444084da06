//! Lifecycle event bus
//!
//! Handler registration in place of ambient listeners: subscribers attach
//! to a named lifecycle signal and dispatch runs synchronously, in
//! subscription order.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::event::{Lifecycle, SettleEvent, SwapReview};

type SwapHandler = Box<dyn Fn(&mut SwapReview) + Send + Sync>;
type SettleHandler = Box<dyn Fn(&SettleEvent) + Send + Sync>;

pub struct EventBus {
    before_swap: Arc<RwLock<Vec<SwapHandler>>>,
    after_settle: Arc<RwLock<Vec<SettleHandler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            before_swap: Arc::new(RwLock::new(Vec::new())),
            after_settle: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to the before-swap signal.
    pub fn on_before_swap<F>(&self, handler: F)
    where
        F: Fn(&mut SwapReview) + Send + Sync + 'static,
    {
        self.before_swap.write().push(Box::new(handler));
    }

    /// Subscribe to the after-settle signal.
    pub fn on_after_settle<F>(&self, handler: F)
    where
        F: Fn(&SettleEvent) + Send + Sync + 'static,
    {
        self.after_settle.write().push(Box::new(handler));
    }

    /// Run every before-swap subscriber over a mutable review.
    pub fn emit_before_swap(&self, review: &mut SwapReview) {
        let handlers = self.before_swap.read();
        tracing::debug!(
            event = %Lifecycle::BeforeSwap,
            subscribers = handlers.len(),
            status = %review.status,
            "Dispatching lifecycle event"
        );
        for handler in handlers.iter() {
            handler(review);
        }
    }

    /// Run every after-settle subscriber over the event.
    pub fn emit_after_settle(&self, event: &SettleEvent) {
        let handlers = self.after_settle.read();
        tracing::debug!(
            event = %Lifecycle::AfterSettle,
            subscribers = handlers.len(),
            path = %event.final_path,
            "Dispatching lifecycle event"
        );
        for handler in handlers.iter() {
            handler(event);
        }
    }

    pub fn subscriber_count(&self, lifecycle: Lifecycle) -> usize {
        match lifecycle {
            Lifecycle::BeforeSwap => self.before_swap.read().len(),
            Lifecycle::AfterSettle => self.after_settle.read().len(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            before_swap: Arc::clone(&self.before_swap),
            after_settle: Arc::clone(&self.after_settle),
        }
    }
}
