//! Orchestration value objects - immutable result types.
//!
//! - [`ConnectorOutcome`] - one connector's slot in a dispatch, success or not
//! - [`OrchestrationResult`] - the response envelope for one request
//! - [`HealthReport`] - snapshot of which connectors are enabled
//! - [`ServiceInfo`] - static service identification

use super::mode::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened when a connector was consulted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The connector answered
    Success(String),
    /// The connector has no credential and was not called
    NotConfigured,
    /// The connector call failed; carries the cause
    Failure(String),
}

/// Positional pairing of a connector with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorOutcome {
    /// Connector id (e.g. `gemini`)
    pub connector: String,
    /// Human-readable connector name (e.g. `Google Gemini`)
    pub display_name: String,
    pub status: OutcomeStatus,
}

impl ConnectorOutcome {
    pub fn success(
        connector: impl Into<String>,
        display_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            connector: connector.into(),
            display_name: display_name.into(),
            status: OutcomeStatus::Success(content.into()),
        }
    }

    pub fn not_configured(connector: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            connector: connector.into(),
            display_name: display_name.into(),
            status: OutcomeStatus::NotConfigured,
        }
    }

    pub fn failure(
        connector: impl Into<String>,
        display_name: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            connector: connector.into(),
            display_name: display_name.into(),
            status: OutcomeStatus::Failure(cause.into()),
        }
    }

    /// Placeholder text for a connector without a credential
    pub fn not_configured_text(display_name: &str) -> String {
        format!("[{}] not configured", display_name)
    }

    /// Inline text for a failed connector call
    pub fn failure_text(display_name: &str, cause: &str) -> String {
        format!("Error querying {}: {}", display_name, cause)
    }

    /// Returns `true` if the connector produced a real answer
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success(_))
    }

    /// The inline text for this slot: the answer, the placeholder, or the
    /// name-tagged failure.
    pub fn text(&self) -> String {
        match &self.status {
            OutcomeStatus::Success(content) => content.clone(),
            OutcomeStatus::NotConfigured => Self::not_configured_text(&self.display_name),
            OutcomeStatus::Failure(cause) => Self::failure_text(&self.display_name, cause),
        }
    }
}

/// Complete result of one orchestration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationResult {
    /// The synthesized answer
    pub result: String,
    /// Confidence in [0.0, 1.0]; 0.0 only when no connector answered
    pub consensus_score: f64,
    /// Connector ids consulted, in active-pool order
    pub ais_consulted: Vec<String>,
    /// Wall time of the whole pipeline, in seconds
    pub processing_time: f64,
    pub timestamp: DateTime<Utc>,
    /// Mode the request ran under
    pub mode: Mode,
    /// Per-connector outcomes, same order as `ais_consulted`
    #[serde(default)]
    pub outcomes: Vec<ConnectorOutcome>,
}

/// Read-only snapshot of registry state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    /// Enabled connector ids in the core pool
    pub enabled_core: Vec<String>,
    /// Enabled connector ids in the extended pool
    pub enabled_extended: Vec<String>,
    pub total_enabled: usize,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    pub fn new(enabled_core: Vec<String>, enabled_extended: Vec<String>) -> Self {
        let total_enabled = enabled_core.len() + enabled_extended.len();
        Self {
            status: "healthy".to_string(),
            enabled_core,
            enabled_extended,
            total_enabled,
            timestamp: Utc::now(),
        }
    }
}

/// Static service identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl ServiceInfo {
    pub fn operational(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            status: "operational".to_string(),
            timestamp: Utc::now(),
        }
    }
}
