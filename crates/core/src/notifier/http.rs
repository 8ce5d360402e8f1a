//! HTTP delivery notifier implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::EndpointsConfig;
use crate::order::OrderItem;

use super::{AlertMessage, DeliveryNotifier, NotifyError};

/// Delivery notifier that POSTs alerts to the remote alert API.
pub struct HttpDeliveryNotifier {
    client: Client,
    config: EndpointsConfig,
}

impl HttpDeliveryNotifier {
    /// Create a new notifier with its own HTTP client.
    pub fn new(config: EndpointsConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, config)
    }

    /// Create a notifier sharing an existing HTTP client.
    pub fn with_client(client: Client, config: EndpointsConfig) -> Self {
        Self { client, config }
    }

    fn alerts_url(&self) -> String {
        format!("{}/alerts", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl DeliveryNotifier for HttpDeliveryNotifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn notify(&self, order_id: &str, item: &OrderItem) -> Result<(), NotifyError> {
        let url = self.alerts_url();
        let alert = AlertMessage::for_delivered_item(order_id, item);
        debug!(url = %url, order_id = %order_id, "Sending delivery alert");

        let response = self
            .client
            .post(&url)
            .json(&alert)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout
                } else {
                    NotifyError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::RequestFailed(status.as_u16()));
        }

        Ok(())
    }
}
