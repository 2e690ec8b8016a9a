//! Simulated connector
//!
//! Stands in for a real provider client: waits a fixed latency, then echoes
//! a short excerpt of the prompt. Enabled iff its credential was present
//! when it was built.

use async_trait::async_trait;
use nexus_application::{Connector, ConnectorError, CredentialSource};
use nexus_domain::{ConnectorSpec, Prompt, RequestContext};
use std::time::Duration;
use tracing::debug;

/// Default simulated upstream latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

const PROMPT_EXCERPT_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct SimulatedConnector {
    spec: ConnectorSpec,
    enabled: bool,
    latency: Duration,
}

impl SimulatedConnector {
    /// Build a connector, reading its credential once
    pub fn from_credentials(
        spec: ConnectorSpec,
        credentials: &dyn CredentialSource,
        latency: Duration,
    ) -> Self {
        let enabled = credentials.is_present(&spec.credential_env);
        Self::new(spec, enabled, latency)
    }

    pub fn new(spec: ConnectorSpec, enabled: bool, latency: Duration) -> Self {
        Self {
            spec,
            enabled,
            latency,
        }
    }

    pub fn spec(&self) -> &ConnectorSpec {
        &self.spec
    }
}

#[async_trait]
impl Connector for SimulatedConnector {
    fn id(&self) -> &str {
        &self.spec.id
    }

    fn display_name(&self) -> &str {
        &self.spec.display_name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn call(
        &self,
        prompt: &Prompt,
        _context: Option<&RequestContext>,
    ) -> Result<String, ConnectorError> {
        if !self.enabled {
            return Err(ConnectorError::NotConfigured);
        }
        debug!(
            "Simulating {} with {}ms latency",
            self.spec.id,
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        Ok(format!(
            "[{}] Simulated response for: {}...",
            self.spec.display_name,
            prompt.excerpt(PROMPT_EXCERPT_CHARS)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_application::StaticCredentials;
    use nexus_domain::PoolKind;

    fn spec() -> ConnectorSpec {
        ConnectorSpec::new("gpt", "OpenAI GPT", "OPENAI_API_KEY", PoolKind::Core)
    }

    #[test]
    fn test_enabled_follows_credential() {
        let with_key = StaticCredentials::new().with("OPENAI_API_KEY", "sk-test");
        let on = SimulatedConnector::from_credentials(spec(), &with_key, DEFAULT_LATENCY);
        assert!(on.is_enabled());

        let off =
            SimulatedConnector::from_credentials(spec(), &StaticCredentials::new(), DEFAULT_LATENCY);
        assert!(!off.is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_truncates_prompt() {
        let connector = SimulatedConnector::new(spec(), true, Duration::from_millis(500));
        let long = "x".repeat(80);
        let prompt = Prompt::try_new(long).unwrap();

        let start = tokio::time::Instant::now();
        let reply = connector.query(&prompt, None).await.unwrap();

        assert_eq!(
            reply,
            format!("[OpenAI GPT] Simulated response for: {}...", "x".repeat(50))
        );
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_disabled_query_is_placeholder() {
        let connector = SimulatedConnector::new(spec(), false, Duration::from_secs(60));
        let prompt = Prompt::try_new("hello").unwrap();
        let reply = connector.query(&prompt, None).await.unwrap();
        assert_eq!(reply, "[OpenAI GPT] not configured");
    }

    #[tokio::test]
    async fn test_direct_call_without_credential_fails() {
        let connector = SimulatedConnector::new(spec(), false, Duration::from_secs(60));
        let prompt = Prompt::try_new("hello").unwrap();
        assert_eq!(
            connector.call(&prompt, None).await,
            Err(ConnectorError::NotConfigured)
        );
    }
}
