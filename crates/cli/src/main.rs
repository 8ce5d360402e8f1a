use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediq_core::{
    load_config, validate_config, Config, HttpDeliveryNotifier, HttpOrderRepository,
    OrderOrchestrator, OrderProcessor,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MEDIQ_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration, falling back to defaults when no file is present
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No configuration file at {:?}, using defaults", config_path);
        Config::default()
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Order API base URL: {}", config.endpoints.base_url);

    // One shared transport handle for the whole run, released when the
    // orchestrator goes out of scope.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.endpoints.timeout_secs as u64))
        .build()
        .context("Failed to create HTTP client")?;

    let repository = Arc::new(HttpOrderRepository::with_client(
        client.clone(),
        config.endpoints.clone(),
    ));
    let notifier = Arc::new(HttpDeliveryNotifier::with_client(
        client,
        config.endpoints.clone(),
    ));

    let orchestrator = OrderOrchestrator::new(repository, OrderProcessor::new(notifier));

    let summary = orchestrator.run().await;

    if summary.fetch_failed {
        error!("Run aborted: order fetch failed");
    } else {
        info!(
            orders_fetched = summary.orders_fetched,
            orders_persisted = summary.orders_persisted,
            persist_failures = summary.persist_failures,
            "Run complete"
        );
    }

    Ok(())
}
