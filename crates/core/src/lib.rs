pub mod config;
pub mod notifier;
pub mod orchestrator;
pub mod order;
pub mod processor;
pub mod repository;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, EndpointsConfig,
};
pub use notifier::{AlertMessage, DeliveryNotifier, HttpDeliveryNotifier, NotifyError};
pub use orchestrator::{OrderOrchestrator, RunSummary};
pub use order::{Order, OrderItem};
pub use processor::OrderProcessor;
pub use repository::{FetchError, HttpOrderRepository, OrderRepository, PersistError};
