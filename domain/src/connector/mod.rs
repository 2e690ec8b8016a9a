//! Connector catalog
//!
//! Static description of the connectors the service knows about. Each entry
//! names the one credential variable that decides whether it is enabled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pool a connector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    /// Consulted for every request
    Core,
    /// Consulted only in development mode
    Extended,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Core => write!(f, "core"),
            PoolKind::Extended => write!(f, "extended"),
        }
    }
}

/// Description of one connector (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorSpec {
    /// Stable id reported in results (e.g. `gemini`)
    pub id: String,
    /// Name used in placeholder and error text (e.g. `Google Gemini`)
    pub display_name: String,
    /// Credential variable read once at construction
    pub credential_env: String,
    pub pool: PoolKind,
}

impl ConnectorSpec {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        credential_env: impl Into<String>,
        pool: PoolKind,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            credential_env: credential_env.into(),
            pool,
        }
    }

    /// Override the credential variable
    pub fn with_credential_env(mut self, var: impl Into<String>) -> Self {
        self.credential_env = var.into();
        self
    }

    /// The built-in catalog, core pool first, each pool in iteration order
    pub fn catalog() -> Vec<ConnectorSpec> {
        use PoolKind::{Core, Extended};

        vec![
            ConnectorSpec::new("gemini", "Google Gemini", "GOOGLE_GEMINI_API_KEY", Core),
            ConnectorSpec::new("gpt", "OpenAI GPT", "OPENAI_API_KEY", Core),
            ConnectorSpec::new("claude", "Anthropic Claude", "ANTHROPIC_API_KEY", Core),
            ConnectorSpec::new("qwen", "Alibaba Qwen", "ALIBABA_QWEN_API_KEY", Core),
            ConnectorSpec::new("grok", "xAI Grok", "XAI_GROK_API_KEY", Core),
            ConnectorSpec::new("code_llama", "Code Llama", "CODE_LLAMA_API_KEY", Extended),
            ConnectorSpec::new("alphacode", "AlphaCode", "ALPHACODE_API_KEY", Extended),
            ConnectorSpec::new("copilot", "GitHub Copilot", "COPILOT_API_KEY", Extended),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_pools() {
        let catalog = ConnectorSpec::catalog();
        let core: Vec<_> = catalog.iter().filter(|s| s.pool == PoolKind::Core).collect();
        let extended: Vec<_> = catalog
            .iter()
            .filter(|s| s.pool == PoolKind::Extended)
            .collect();
        assert_eq!(core.len(), 5);
        assert_eq!(extended.len(), 3);
        assert_eq!(core[0].id, "gemini");
        assert_eq!(extended[2].id, "copilot");
    }

    #[test]
    fn test_catalog_ids_and_credentials_unique() {
        let catalog = ConnectorSpec::catalog();
        let ids: HashSet<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        let vars: HashSet<_> = catalog.iter().map(|s| s.credential_env.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(vars.len(), catalog.len());
    }

    #[test]
    fn test_with_credential_env() {
        let spec = ConnectorSpec::new("x", "X", "X_KEY", PoolKind::Core).with_credential_env("Y_KEY");
        assert_eq!(spec.credential_env, "Y_KEY");
    }
}
