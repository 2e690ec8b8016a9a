//! Builds the connector registry from the catalog, credentials and config.

use super::simulated::{DEFAULT_LATENCY, SimulatedConnector};
use crate::config::FileConnectorsConfig;
use nexus_application::{Connector, ConnectorRegistry, CredentialSource};
use nexus_domain::{ConnectorSpec, PoolKind};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Builder for a [`ConnectorRegistry`] of simulated connectors
pub struct RegistryBuilder<'a> {
    credentials: &'a dyn CredentialSource,
    specs: Vec<ConnectorSpec>,
    latency: Duration,
    disabled: HashSet<String>,
}

impl<'a> RegistryBuilder<'a> {
    /// Start from the built-in catalog
    pub fn new(credentials: &'a dyn CredentialSource) -> Self {
        Self {
            credentials,
            specs: ConnectorSpec::catalog(),
            latency: DEFAULT_LATENCY,
            disabled: HashSet::new(),
        }
    }

    /// Replace the catalog
    pub fn with_specs(mut self, specs: Vec<ConnectorSpec>) -> Self {
        self.specs = specs;
        self
    }

    /// Force a connector off regardless of its credential
    pub fn disable(mut self, id: impl Into<String>) -> Self {
        self.disabled.insert(id.into());
        self
    }

    /// Apply the `[connectors]` config section
    pub fn with_config(mut self, config: &FileConnectorsConfig) -> Self {
        self.latency = config.latency();
        self.disabled.extend(config.disabled.iter().cloned());
        for spec in &mut self.specs {
            if let Some(var) = config.credential_env.get(&spec.id) {
                spec.credential_env = var.clone();
            }
        }
        self
    }

    /// Build both pools, reading each credential exactly once
    pub fn build(self) -> ConnectorRegistry {
        let mut core: Vec<Arc<dyn Connector>> = Vec::new();
        let mut extended: Vec<Arc<dyn Connector>> = Vec::new();

        for spec in self.specs {
            let connector = if self.disabled.contains(&spec.id) {
                debug!("Connector {} disabled by configuration", spec.id);
                SimulatedConnector::new(spec, false, self.latency)
            } else {
                SimulatedConnector::from_credentials(spec, self.credentials, self.latency)
            };

            let spec = connector.spec();
            let pool = spec.pool;
            if connector.is_enabled() {
                info!("Connector {} ({}) enabled", spec.id, spec.pool);
            } else {
                debug!(
                    "Connector {} ({}) not configured: {} is unset",
                    spec.id, spec.pool, spec.credential_env
                );
            }

            match pool {
                PoolKind::Core => core.push(Arc::new(connector)),
                PoolKind::Extended => extended.push(Arc::new(connector)),
            }
        }

        ConnectorRegistry::new(core, extended)
    }
}
