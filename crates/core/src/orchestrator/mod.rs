//! Processing orchestrator.
//!
//! Drives one full run: fetch all orders, process each one, persist each
//! result. Orders are handled strictly sequentially; a persist failure is
//! logged and never aborts the loop. Only a fetch failure terminates the
//! run early.

use std::sync::Arc;

use tracing::{error, info};

use crate::processor::OrderProcessor;
use crate::repository::OrderRepository;

/// Outcome counts for one orchestration run.
///
/// All outcomes also surface via logs; the summary exists so callers and
/// tests can inspect the run without scraping log output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether the initial fetch failed (no orders were processed).
    pub fetch_failed: bool,
    /// Number of orders returned by the fetch.
    pub orders_fetched: usize,
    /// Number of orders successfully persisted.
    pub orders_persisted: usize,
    /// Number of orders whose persist call failed.
    pub persist_failures: usize,
}

/// The order orchestrator - drives orders through the processing workflow.
pub struct OrderOrchestrator {
    repository: Arc<dyn OrderRepository>,
    processor: OrderProcessor,
}

impl OrderOrchestrator {
    /// Create a new orchestrator.
    pub fn new(repository: Arc<dyn OrderRepository>, processor: OrderProcessor) -> Self {
        Self {
            repository,
            processor,
        }
    }

    /// Execute one full fetch, process, persist cycle over all orders.
    pub async fn run(&self) -> RunSummary {
        info!(repository = self.repository.name(), "Starting order processing run");

        let orders = match self.repository.fetch_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "Failed to fetch orders, aborting run");
                return RunSummary {
                    fetch_failed: true,
                    ..RunSummary::default()
                };
            }
        };

        let mut summary = RunSummary {
            orders_fetched: orders.len(),
            ..RunSummary::default()
        };

        for order in orders {
            let updated = self.processor.process(order).await;

            match self.repository.persist_order(&updated).await {
                Ok(()) => {
                    info!(order_id = %updated.order_id, "Updated order sent for processing");
                    summary.orders_persisted += 1;
                }
                Err(e) => {
                    error!(
                        order_id = %updated.order_id,
                        error = %e,
                        "Failed to send updated order for processing"
                    );
                    summary.persist_failures += 1;
                }
            }
        }

        info!(
            orders_fetched = summary.orders_fetched,
            orders_persisted = summary.orders_persisted,
            persist_failures = summary.persist_failures,
            "Results sent to relevant APIs"
        );

        summary
    }
}
