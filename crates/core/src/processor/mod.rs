//! Order processor.
//!
//! Walks an order's line items, sends a delivery alert for each item in the
//! delivered state, and advances that item's notification counter.

use std::sync::Arc;

use tracing::{error, info};

use crate::notifier::DeliveryNotifier;
use crate::order::Order;

/// Processes a single order's line items.
pub struct OrderProcessor {
    notifier: Arc<dyn DeliveryNotifier>,
}

impl OrderProcessor {
    /// Create a new processor.
    pub fn new(notifier: Arc<dyn DeliveryNotifier>) -> Self {
        Self { notifier }
    }

    /// Process one order.
    ///
    /// For each delivered item, an alert is attempted and the item's
    /// `delivery_notification` counter is incremented by exactly one. The
    /// counter advances whether or not the alert went out; alert failures
    /// are logged and never fail the order. Items are mutated in place and
    /// keep their original ordering.
    pub async fn process(&self, mut order: Order) -> Order {
        let order_id = order.order_id.clone();

        match order.items {
            Some(ref mut items) if !items.is_empty() => {
                for item in items.iter_mut() {
                    if !item.is_delivered() {
                        continue;
                    }

                    match self.notifier.notify(&order_id, item).await {
                        Ok(()) => {
                            info!(
                                order_id = %order_id,
                                item = %item.description,
                                "Alert sent for delivered item"
                            );
                        }
                        Err(e) => {
                            error!(
                                order_id = %order_id,
                                item = %item.description,
                                error = %e,
                                "Failed to send alert for delivered item"
                            );
                        }
                    }

                    // Saturating: a counter at u32::MAX must not wrap.
                    item.delivery_notification = item.delivery_notification.saturating_add(1);
                }
            }
            _ => {
                error!(order_id = %order_id, "Order has no items to process");
            }
        }

        order
    }
}
