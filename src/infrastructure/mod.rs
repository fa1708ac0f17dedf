pub mod config;
pub mod container;
pub mod external_services;
pub mod telemetry;

// Re-export commonly used items
pub use config::{ConfigError, ServiceConfig};
pub use container::AppContainer;
pub use external_services::LexicalApiClient;
pub use telemetry::init_tracing;
