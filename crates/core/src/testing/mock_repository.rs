//! Mock order repository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::order::Order;
use crate::repository::{FetchError, OrderRepository, PersistError};

/// Mock implementation of the OrderRepository trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable order collections
/// - Track persisted orders for assertions
/// - Inject fetch failures and per-order persist failures
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    /// Successfully persisted orders.
    persisted: Arc<RwLock<Vec<Order>>>,
    /// Order ids of every persist attempt, failed ones included.
    persist_attempts: Arc<RwLock<Vec<String>>>,
    /// If set, the next fetch fails with this error.
    next_fetch_error: Arc<RwLock<Option<FetchError>>>,
    /// Order ids whose persist calls fail, with the HTTP status to report.
    persist_failures: Arc<RwLock<HashMap<String, u16>>>,
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOrderRepository {
    /// Create a new mock repository with no orders.
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            persisted: Arc::new(RwLock::new(Vec::new())),
            persist_attempts: Arc::new(RwLock::new(Vec::new())),
            next_fetch_error: Arc::new(RwLock::new(None)),
            persist_failures: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set the orders returned by subsequent fetches.
    pub async fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.write().await = orders;
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_fetch_error(&self, error: FetchError) {
        *self.next_fetch_error.write().await = Some(error);
    }

    /// Make persist calls for the given order id fail with an HTTP status.
    pub async fn fail_persist_for(&self, order_id: &str, status: u16) {
        self.persist_failures
            .write()
            .await
            .insert(order_id.to_string(), status);
    }

    /// Get the successfully persisted orders.
    pub async fn persisted_orders(&self) -> Vec<Order> {
        self.persisted.read().await.clone()
    }

    /// Total number of persist attempts, successful or not.
    pub async fn persist_count(&self) -> usize {
        self.persist_attempts.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        if let Some(err) = self.next_fetch_error.write().await.take() {
            return Err(err);
        }
        Ok(self.orders.read().await.clone())
    }

    async fn persist_order(&self, order: &Order) -> Result<(), PersistError> {
        self.persist_attempts
            .write()
            .await
            .push(order.order_id.clone());

        if let Some(status) = self.persist_failures.read().await.get(&order.order_id) {
            return Err(PersistError::RequestFailed(*status));
        }

        self.persisted.write().await.push(order.clone());
        Ok(())
    }
}
