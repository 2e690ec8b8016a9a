//! Connector adapters
//!
//! Real provider connectivity is out of scope; every connector is a
//! [`SimulatedConnector`] gated by its credential.

pub mod catalog;
pub mod simulated;

pub use catalog::RegistryBuilder;
pub use simulated::{DEFAULT_LATENCY, SimulatedConnector};
