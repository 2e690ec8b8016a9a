//! Connector port
//!
//! Defines the interface for a named capability that answers a prompt.
//! Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use nexus_domain::{ConnectorOutcome, Prompt, RequestContext};
use thiserror::Error;

/// Errors a connector call can produce
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// Returned by `call` when the adapter has no credential
    #[error("Connector not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A named connector that can answer a prompt
///
/// The enabled flag is decided once, when the connector is built, and never
/// changes afterwards.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Stable id reported in results (e.g. `gemini`)
    fn id(&self) -> &str;

    /// Name used in placeholder and error text
    fn display_name(&self) -> &str;

    /// Whether a credential was found at construction
    fn is_enabled(&self) -> bool;

    /// Perform the upstream call. Only invoked on enabled connectors.
    async fn call(
        &self,
        prompt: &Prompt,
        context: Option<&RequestContext>,
    ) -> Result<String, ConnectorError>;

    /// Answer a prompt.
    ///
    /// A disabled connector returns `"[<name>] not configured"` without
    /// attempting a call.
    async fn query(
        &self,
        prompt: &Prompt,
        context: Option<&RequestContext>,
    ) -> Result<String, ConnectorError> {
        if !self.is_enabled() {
            return Ok(ConnectorOutcome::not_configured_text(self.display_name()));
        }
        self.call(prompt, context).await
    }
}
