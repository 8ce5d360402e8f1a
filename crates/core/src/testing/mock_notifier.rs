//! Mock delivery notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notifier::{DeliveryNotifier, NotifyError};
use crate::order::OrderItem;

/// A recorded alert for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedAlert {
    /// Order the alert belongs to.
    pub order_id: String,
    /// Item description from the alert.
    pub description: String,
    /// The item's notification count at alert time (pre-increment).
    pub delivery_notification: u32,
}

/// Mock implementation of the DeliveryNotifier trait.
///
/// Provides controllable behavior for testing:
/// - Track sent alerts for assertions
/// - Inject a one-shot or permanent failure
pub struct MockDeliveryNotifier {
    alerts: Arc<RwLock<Vec<RecordedAlert>>>,
    /// If set, the next notify call fails with this error.
    next_error: Arc<RwLock<Option<NotifyError>>>,
    /// If true, every notify call fails.
    always_fail: Arc<RwLock<bool>>,
}

impl Default for MockDeliveryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDeliveryNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self {
            alerts: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            always_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Get recorded alerts.
    pub async fn recorded_alerts(&self) -> Vec<RecordedAlert> {
        self.alerts.read().await.clone()
    }

    /// Get the number of alerts sent.
    pub async fn alert_count(&self) -> usize {
        self.alerts.read().await.len()
    }

    /// Configure the next notify call to fail with the given error.
    pub async fn set_next_error(&self, error: NotifyError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every notify call fail with a 500-style error.
    pub async fn set_always_fail(&self, fail: bool) {
        *self.always_fail.write().await = fail;
    }

    async fn take_error(&self) -> Option<NotifyError> {
        if *self.always_fail.read().await {
            return Some(NotifyError::RequestFailed(500));
        }
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl DeliveryNotifier for MockDeliveryNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn notify(&self, order_id: &str, item: &OrderItem) -> Result<(), NotifyError> {
        // The attempt is recorded even when it fails, so tests can assert
        // on how many alerts were tried.
        self.alerts.write().await.push(RecordedAlert {
            order_id: order_id.to_string(),
            description: item.description.clone(),
            delivery_notification: item.delivery_notification,
        });

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        Ok(())
    }
}
