//! Credential sources backed by the process environment

use nexus_application::CredentialSource;

/// Reads credentials from environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for EnvCredentialSource {
    fn lookup(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }
}
