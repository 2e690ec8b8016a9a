//! Connector configuration from TOML (`[connectors]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Raw connector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConnectorsConfig {
    /// Simulated upstream latency in milliseconds (default: 500)
    pub latency_ms: u64,
    /// Connector ids forced off regardless of credentials
    pub disabled: Vec<String>,
    /// Connector id → credential variable, overriding the catalog
    pub credential_env: BTreeMap<String, String>,
}

impl Default for FileConnectorsConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            disabled: Vec::new(),
            credential_env: BTreeMap::new(),
        }
    }
}

impl FileConnectorsConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
