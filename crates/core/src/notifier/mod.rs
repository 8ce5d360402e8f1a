//! Delivery alert abstraction.
//!
//! This module provides a `DeliveryNotifier` trait for sending an outbound
//! alert when a line item reaches the delivered state.

mod http;
mod types;

pub use http::HttpDeliveryNotifier;
pub use types::*;
