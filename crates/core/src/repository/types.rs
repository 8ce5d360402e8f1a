//! Types for order repository operations.

use async_trait::async_trait;
use thiserror::Error;

use crate::order::Order;

/// Errors that can occur while fetching the order collection.
///
/// Any fetch error terminates the processing run; no retries are attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Orders request failed with HTTP {0}")]
    RequestFailed(u16),

    #[error("Orders response was empty or malformed: {0}")]
    EmptyOrMalformed(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur while persisting an updated order.
///
/// Persist errors are contained at order granularity; the orchestrator logs
/// them and moves on to the next order.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Update request failed with HTTP {0}")]
    RequestFailed(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,
}

/// Trait for order repository backends.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Fetch the full order collection. Single attempt, no retries.
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError>;

    /// Persist an updated order back to the system of record.
    async fn persist_order(&self, order: &Order) -> Result<(), PersistError>;
}
