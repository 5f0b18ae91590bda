//! The dispatch engine: a subscriber that fans published content out to
//! every registered delivery strategy.

use crate::core::{DeliveryStrategy, NotifyContext, Subscriber};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Fans each published notification out to its registered strategies, in
/// registration order. A strategy failing to deliver is logged and counted
/// but never prevents the remaining strategies from running; the engine
/// does not retry.
pub struct DispatchEngine {
    strategies: Mutex<Vec<Arc<dyn DeliveryStrategy>>>,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self {
            strategies: Mutex::new(Vec::new()),
        }
    }

    /// Registers a delivery strategy. Strategies are invoked in the order
    /// they were added.
    pub fn add_strategy(&self, strategy: Arc<dyn DeliveryStrategy>) {
        debug!(channel = strategy.name(), "delivery strategy registered");
        self.strategies.lock().unwrap().push(strategy);
    }

    /// Number of registered strategies.
    pub fn strategy_count(&self) -> usize {
        self.strategies.lock().unwrap().len()
    }
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscriber for DispatchEngine {
    fn name(&self) -> &str {
        "dispatch-engine"
    }

    async fn on_notify(&self, cx: &NotifyContext<'_>) {
        let content = cx.current_content();
        let strategies = self.strategies.lock().unwrap().clone();

        for strategy in strategies {
            match strategy.deliver(content).await {
                Ok(()) => {
                    metrics::counter!("delivery.sent").increment(1);
                    debug!(channel = strategy.name(), "delivered");
                }
                Err(e) => {
                    metrics::counter!("delivery.failed").increment(1);
                    error!(
                        channel = strategy.name(),
                        bytes = content.len(),
                        error = %e,
                        "delivery failed"
                    );
                }
            }
        }
    }
}
