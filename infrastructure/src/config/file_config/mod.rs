//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod connectors;
mod output;

pub use connectors::FileConnectorsConfig;
pub use output::FileOutputConfig;

use nexus_domain::ConnectorSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Connector settings
    pub connectors: FileConnectorsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the configuration against the known connector catalog.
    ///
    /// Unknown connector ids are reported, never fatal.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let catalog = ConnectorSpec::catalog();
        let known = |id: &str| catalog.iter().any(|s| s.id == id);
        let mut issues = Vec::new();

        for id in &self.connectors.disabled {
            if !known(id) {
                issues.push(ConfigIssue {
                    field: "connectors.disabled".to_string(),
                    message: format!("unknown connector '{}'", id),
                });
            }
        }

        for (id, var) in &self.connectors.credential_env {
            if !known(id) {
                issues.push(ConfigIssue {
                    field: format!("connectors.credential_env.{}", id),
                    message: format!("unknown connector '{}'", id),
                });
            }
            if var.trim().is_empty() {
                issues.push(ConfigIssue {
                    field: format!("connectors.credential_env.{}", id),
                    message: "credential variable name is empty".to_string(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[connectors]
latency_ms = 50
disabled = ["grok"]

[connectors.credential_env]
gemini = "GEMINI_KEY"

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connectors.latency_ms, 50);
        assert_eq!(config.connectors.disabled, vec!["grok"]);
        assert_eq!(
            config.connectors.credential_env.get("gemini"),
            Some(&"GEMINI_KEY".to_string())
        );
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.connectors.latency_ms, 500);
        assert!(config.connectors.disabled.is_empty());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.connectors, FileConnectorsConfig::default());
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_unknown_ids() {
        let mut config = FileConfig::default();
        config.connectors.disabled.push("skynet".to_string());
        config
            .connectors
            .credential_env
            .insert("gpt".to_string(), " ".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "connectors.disabled");
        assert!(issues[0].to_string().contains("skynet"));
        assert_eq!(issues[1].field, "connectors.credential_env.gpt");
    }
}
