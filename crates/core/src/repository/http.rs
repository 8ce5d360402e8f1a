//! HTTP order repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::EndpointsConfig;
use crate::order::Order;

use super::{FetchError, OrderRepository, PersistError};

/// Order repository backed by the remote order API.
pub struct HttpOrderRepository {
    client: Client,
    config: EndpointsConfig,
}

impl HttpOrderRepository {
    /// Create a new repository with its own HTTP client.
    pub fn new(config: EndpointsConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, config)
    }

    /// Create a repository sharing an existing HTTP client.
    ///
    /// The client is expected to already carry a request timeout.
    pub fn with_client(client: Client, config: EndpointsConfig) -> Self {
        Self { client, config }
    }

    /// Get the base URL without trailing slash.
    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let url = format!("{}/orders", self.base_url());
        debug!(url = %url, "Fetching orders");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::ConnectionFailed(e.to_string())
            } else {
                FetchError::EmptyOrMalformed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed(status.as_u16()));
        }

        let orders: Vec<Order> = response
            .json()
            .await
            .map_err(|e| FetchError::EmptyOrMalformed(e.to_string()))?;

        debug!(count = orders.len(), "Orders fetched");
        Ok(orders)
    }

    async fn persist_order(&self, order: &Order) -> Result<(), PersistError> {
        let url = format!("{}/update", self.base_url());
        debug!(url = %url, order_id = %order.order_id, "Persisting order");

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PersistError::Timeout
                } else {
                    PersistError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistError::RequestFailed(status.as_u16()));
        }

        Ok(())
    }
}
