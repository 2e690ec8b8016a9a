//! Infrastructure layer for nexus
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod connectors;
pub mod credentials;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, FileConnectorsConfig, FileOutputConfig};
pub use connectors::{DEFAULT_LATENCY, RegistryBuilder, SimulatedConnector};
pub use credentials::EnvCredentialSource;
