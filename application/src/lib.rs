//! Application layer for nexus
//!
//! This crate contains the port definitions and the orchestration use cases.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    connector::{Connector, ConnectorError},
    credentials::{CredentialSource, StaticCredentials},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::dispatch::{DispatchError, Dispatcher};
pub use use_cases::orchestrate::{OrchestrationError, OrchestrationService, SERVICE_NAME};
pub use use_cases::registry::ConnectorRegistry;
pub use use_cases::select_pool::ModeSelector;
