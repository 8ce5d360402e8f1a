//! Types for delivery alert operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::OrderItem;

/// Errors that can occur while sending a delivery alert.
///
/// Alert failures are non-fatal: the processor logs them and still advances
/// the item's notification counter.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Alert request failed with HTTP {0}")]
    RequestFailed(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,
}

/// Wire payload for the alerts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

impl AlertMessage {
    /// Build the alert text for a delivered item.
    ///
    /// The notification count embedded in the message is the item's current
    /// (pre-increment) count.
    pub fn for_delivered_item(order_id: &str, item: &OrderItem) -> Self {
        Self {
            message: format!(
                "Alert for delivered item: Order {}, Item: {}, Delivery Notifications: {}",
                order_id, item.description, item.delivery_notification
            ),
        }
    }
}

/// Trait for delivery alert backends.
#[async_trait]
pub trait DeliveryNotifier: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Send an alert describing a delivered item. Does not mutate the item.
    async fn notify(&self, order_id: &str, item: &OrderItem) -> Result<(), NotifyError>;
}
