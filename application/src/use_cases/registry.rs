//! Connector registry
//!
//! Holds the core and extended connector pools. Built once at startup and
//! shared read-only between concurrent requests.

use crate::ports::connector::Connector;
use nexus_domain::{HealthReport, PoolKind};
use std::sync::Arc;

/// The two fixed connector pools
#[derive(Clone, Default)]
pub struct ConnectorRegistry {
    core: Vec<Arc<dyn Connector>>,
    extended: Vec<Arc<dyn Connector>>,
}

impl ConnectorRegistry {
    pub fn new(core: Vec<Arc<dyn Connector>>, extended: Vec<Arc<dyn Connector>>) -> Self {
        Self { core, extended }
    }

    /// Connectors of one pool, in iteration order
    pub fn pool(&self, kind: PoolKind) -> &[Arc<dyn Connector>] {
        match kind {
            PoolKind::Core => &self.core,
            PoolKind::Extended => &self.extended,
        }
    }

    pub fn core(&self) -> &[Arc<dyn Connector>] {
        &self.core
    }

    pub fn extended(&self) -> &[Arc<dyn Connector>] {
        &self.extended
    }

    /// Look a connector up by id in either pool
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Connector>> {
        self.core
            .iter()
            .chain(self.extended.iter())
            .find(|c| c.id() == id)
    }

    /// Ids of the enabled connectors in one pool, in iteration order
    pub fn enabled_ids(&self, kind: PoolKind) -> Vec<String> {
        self.pool(kind)
            .iter()
            .filter(|c| c.is_enabled())
            .map(|c| c.id().to_string())
            .collect()
    }

    /// Total number of connectors across both pools
    pub fn len(&self) -> usize {
        self.core.len() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of enabled connectors per pool
    pub fn health(&self) -> HealthReport {
        HealthReport::new(
            self.enabled_ids(PoolKind::Core),
            self.enabled_ids(PoolKind::Extended),
        )
    }
}

impl std::fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = |pool: &[Arc<dyn Connector>]| -> Vec<String> {
            pool.iter().map(|c| c.id().to_string()).collect()
        };
        f.debug_struct("ConnectorRegistry")
            .field("core", &ids(&self.core))
            .field("extended", &ids(&self.extended))
            .finish()
    }
}
