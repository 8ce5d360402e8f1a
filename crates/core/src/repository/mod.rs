//! Order repository abstraction.
//!
//! This module provides an `OrderRepository` trait for reading the order
//! collection from the remote system of record and writing updated orders
//! back to it.

mod http;
mod types;

pub use http::HttpOrderRepository;
pub use types::*;
