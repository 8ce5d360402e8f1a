//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external service traits,
//! allowing the processor and orchestrator to be tested without real
//! infrastructure.

mod mock_notifier;
mod mock_repository;

pub use mock_notifier::{MockDeliveryNotifier, RecordedAlert};
pub use mock_repository::MockOrderRepository;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::order::{Order, OrderItem};

    /// Create a test order with the given items.
    pub fn order(order_id: &str, items: Vec<OrderItem>) -> Order {
        Order {
            order_id: order_id.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            total: 39.99,
            items: Some(items),
        }
    }

    /// Create a line item already in the delivered state.
    pub fn delivered_item(description: &str) -> OrderItem {
        OrderItem {
            description: description.to_string(),
            status: "Delivered".to_string(),
            delivery_notification: 0,
            price: 39.99,
        }
    }

    /// Create a line item with an arbitrary status.
    pub fn pending_item(description: &str, status: &str) -> OrderItem {
        OrderItem {
            description: description.to_string(),
            status: status.to_string(),
            delivery_notification: 0,
            price: 39.99,
        }
    }
}
