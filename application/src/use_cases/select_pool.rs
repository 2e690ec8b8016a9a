//! Mode selection
//!
//! Maps a request mode to the connectors that should be consulted.

use crate::ports::connector::Connector;
use crate::use_cases::registry::ConnectorRegistry;
use nexus_domain::Mode;
use std::sync::Arc;

/// Picks the active connector pool for a mode
pub struct ModeSelector;

impl ModeSelector {
    /// The active pool before enabled-filtering: core, followed by extended
    /// in development mode.
    pub fn active_pool(registry: &ConnectorRegistry, mode: Mode) -> Vec<Arc<dyn Connector>> {
        let mut pool: Vec<Arc<dyn Connector>> = registry.core().to_vec();
        if mode.includes_extended() {
            pool.extend(registry.extended().iter().cloned());
        }
        pool
    }

    /// The enabled subset of the active pool, in pool order. Empty when no
    /// connector in scope is enabled.
    pub fn select(registry: &ConnectorRegistry, mode: Mode) -> Vec<Arc<dyn Connector>> {
        Self::active_pool(registry, mode)
            .into_iter()
            .filter(|c| c.is_enabled())
            .collect()
    }
}
