//! Types for medical equipment orders.
//!
//! Field names follow the wire format of the remote order system
//! (PascalCase JSON), mapped via serde renames.

use serde::{Deserialize, Serialize};

/// Status string that marks an item as delivered.
pub const DELIVERED_STATUS: &str = "Delivered";

/// A customer's equipment order, as returned by the orders endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, unique within a fetch batch.
    #[serde(rename = "OrderId")]
    pub order_id: String,
    /// Customer first name (informational).
    #[serde(rename = "OrderFirstName", default)]
    pub first_name: String,
    /// Customer last name (informational).
    #[serde(rename = "OrderLastName", default)]
    pub last_name: String,
    /// Order total (informational).
    #[serde(rename = "Total", default)]
    pub total: f64,
    /// Line items. The field may be absent entirely on the wire.
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

/// A single line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Item description.
    #[serde(rename = "Description", default)]
    pub description: String,
    /// Delivery status, compared case-insensitively against "Delivered".
    #[serde(rename = "Status", default)]
    pub status: String,
    /// How many delivery alerts have been sent for this item.
    #[serde(rename = "DeliveryNotification", default)]
    pub delivery_notification: u32,
    /// Item price (informational).
    #[serde(rename = "Price", default)]
    pub price: f64,
}

impl OrderItem {
    /// Whether this item is in the delivered state.
    pub fn is_delivered(&self) -> bool {
        self.status.eq_ignore_ascii_case(DELIVERED_STATUS)
    }
}
