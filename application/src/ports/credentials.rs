//! Credential source port
//!
//! Where connector credentials come from. Looked up once per connector
//! when the registry is built, never per request.

use std::collections::HashMap;

/// Lookup of a designated credential variable
pub trait CredentialSource: Send + Sync {
    /// Raw value of `var`, if set
    fn lookup(&self, var: &str) -> Option<String>;

    /// Whether `var` holds a usable (non-blank) value
    fn is_present(&self, var: &str) -> bool {
        self.lookup(var).is_some_and(|v| !v.trim().is_empty())
    }
}

/// In-memory credential source, mainly for wiring tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(var.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn lookup(&self, var: &str) -> Option<String> {
        self.values.get(var).cloned()
    }
}
