// Public modules
pub mod types;
pub mod config;
pub mod parsing;
pub mod metrics;
pub mod portainer;
pub mod collector;
pub mod store;
pub mod exporter;
pub mod api;

// Re-export commonly used items
pub use types::*;
pub use config::{load_config, load_config_with_env, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use parsing::{state_code, health_code, parse_health_label, ContainerState, HealthStatus};
pub use metrics::normalize;
pub use portainer::{PortainerClient, PortainerError};
pub use collector::{Collector, CycleReport};
pub use store::SnapshotStore;
pub use exporter::render;
