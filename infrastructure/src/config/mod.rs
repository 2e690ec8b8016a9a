//! Configuration file loading for nexus
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEXUS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./nexus.toml` or `./.nexus.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nexus/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileConfig, FileConnectorsConfig, FileOutputConfig};
pub use loader::ConfigLoader;
