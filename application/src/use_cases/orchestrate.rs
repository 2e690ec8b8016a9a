//! Orchestrate use case
//!
//! Drives one request through mode selection, concurrent dispatch and
//! consensus synthesis, and wraps the outcome in a timed result envelope.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::dispatch::{DispatchError, Dispatcher};
use crate::use_cases::registry::ConnectorRegistry;
use crate::use_cases::select_pool::ModeSelector;
use chrono::Utc;
use nexus_domain::{
    AnalysisTemplate, ConsensusSynthesizer, DomainError, HealthReport, NarrativeConsensus,
    OrchestrationRequest, OrchestrationResult, RequestContext, ServiceInfo,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};

/// Service name reported by [`OrchestrationService::info`]
pub const SERVICE_NAME: &str = "Nexus";

/// Errors surfaced to the caller.
///
/// Connector absence or failure never shows up here; those are folded into
/// the result. Only invalid requests and defects in the pipeline itself do.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("Orchestration failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Orchestration failed: synthesis error: {0}")]
    Synthesis(String),
}

impl OrchestrationError {
    /// Whether this is a pipeline defect rather than a rejected request
    pub fn is_service_failure(&self) -> bool {
        !matches!(self, OrchestrationError::InvalidRequest(_))
    }
}

/// Façade over the orchestration pipeline
pub struct OrchestrationService {
    registry: Arc<ConnectorRegistry>,
    dispatcher: Dispatcher,
    synthesizer: Arc<dyn ConsensusSynthesizer>,
}

impl OrchestrationService {
    /// Create a service using the narrative consensus
    pub fn new(registry: Arc<ConnectorRegistry>) -> Self {
        Self {
            registry,
            dispatcher: Dispatcher::new(),
            synthesizer: Arc::new(NarrativeConsensus::default()),
        }
    }

    /// Replace the consensus strategy
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn ConsensusSynthesizer>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Submit raw boundary input: validates structure, then runs the request.
    pub async fn submit_raw(
        &self,
        prompt: &str,
        mode: Option<&str>,
        context: Option<RequestContext>,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        let request = OrchestrationRequest::parse(prompt, mode, context)?;
        self.submit(request).await
    }

    /// Run a request with default (no-op) progress
    pub async fn submit(
        &self,
        request: OrchestrationRequest,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        self.submit_with_progress(request, &NoProgress).await
    }

    /// Run a request with progress callbacks
    pub async fn submit_with_progress(
        &self,
        request: OrchestrationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        let start = Instant::now();
        info!("Orchestrating request in {} mode", request.mode);

        let active = ModeSelector::select(&self.registry, request.mode);
        debug!(
            "Active connectors: {:?}",
            active.iter().map(|c| c.id()).collect::<Vec<_>>()
        );

        let outcomes = self
            .dispatcher
            .dispatch(&active, &request.prompt, request.context.as_ref(), progress)
            .await?;

        let consensus = self
            .synthesizer
            .synthesize(&request.prompt, &outcomes)
            .map_err(|e| OrchestrationError::Synthesis(e.to_string()))?;

        let processing_time = start.elapsed().as_secs_f64();
        info!(
            "Consensus reached from {} connectors in {:.3}s (score {:.2})",
            outcomes.len(),
            processing_time,
            consensus.score
        );

        Ok(OrchestrationResult {
            result: consensus.text,
            consensus_score: consensus.score,
            ais_consulted: outcomes.iter().map(|o| o.connector.clone()).collect(),
            processing_time,
            timestamp: Utc::now(),
            mode: request.mode,
            outcomes,
        })
    }

    /// Enabled connectors per pool. Read-only.
    pub fn health(&self) -> HealthReport {
        self.registry.health()
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo::operational(SERVICE_NAME, env!("CARGO_PKG_VERSION"))
    }

    // ==================== Domain entry points ====================

    /// Diagnose a SIP log (`voip_analysis` mode)
    pub async fn analyze_sip_log(
        &self,
        log: &str,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        self.submit(AnalysisTemplate::sip_log_request(log)?).await
    }

    /// Predict device failures from structured device data (`general` mode)
    pub async fn predict_device_failure(
        &self,
        device_data: &Value,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        self.submit(AnalysisTemplate::device_failure_request(device_data)?)
            .await
    }

    /// Generate a fix for a system error (`development` mode)
    pub async fn auto_correction(
        &self,
        error_data: &Value,
    ) -> Result<OrchestrationResult, OrchestrationError> {
        self.submit(AnalysisTemplate::auto_correction_request(error_data)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::connector::{Connector, ConnectorError};
    use crate::use_cases::test_support::{Behavior, FakeConnector, arc, prompt, registry};
    use nexus_domain::{
        Consensus, ConnectorOutcome, Mode, NO_CONNECTORS_MESSAGE, Prompt,
        SIMULATED_CONSENSUS_SCORE,
    };
    use serde_json::json;
    use std::time::Duration;

    fn service(reg: ConnectorRegistry) -> OrchestrationService {
        OrchestrationService::new(Arc::new(reg))
    }

    #[test]
    fn test_error_display() {
        let err = OrchestrationError::Synthesis("bad template".to_string());
        assert_eq!(
            err.to_string(),
            "Orchestration failed: synthesis error: bad template"
        );
        assert!(err.is_service_failure());

        let err = OrchestrationError::from(DomainError::EmptyPrompt);
        assert_eq!(err.to_string(), "Invalid request: Prompt cannot be empty");
        assert!(!err.is_service_failure());
    }

    #[tokio::test(start_paused = true)]
    async fn test_enabled_and_disabled_general_request() {
        let reg = ConnectorRegistry::new(
            vec![
                arc(FakeConnector::enabled("A")
                    .with_behavior(Behavior::Reply("A thinks yes".to_string()))
                    .with_delay(Duration::from_millis(500))),
                arc(FakeConnector::disabled("B")),
            ],
            vec![arc(FakeConnector::enabled("X"))],
        );

        let result = service(reg)
            .submit_raw("test", Some("general"), None)
            .await
            .unwrap();

        assert_eq!(result.ais_consulted, vec!["A"]);
        assert!(result.result.contains("A thinks yes"));
        assert_eq!(result.consensus_score, SIMULATED_CONSENSUS_SCORE);
        assert!((0.5..0.6).contains(&result.processing_time));
        assert_eq!(result.mode, Mode::General);
    }

    #[tokio::test]
    async fn test_nothing_enabled_returns_fallback() {
        let reg = registry(&[("a", false), ("b", false)], &[("x", false)]);
        let svc = service(reg);

        for mode in Mode::ALL {
            let req = OrchestrationRequest::new(prompt("anyone?")).with_mode(mode);
            let result = svc.submit(req).await.unwrap();
            assert_eq!(result.consensus_score, 0.0);
            assert!(result.ais_consulted.is_empty());
            assert_eq!(result.result, NO_CONNECTORS_MESSAGE);
            assert!(result.processing_time >= 0.0);
        }
    }

    #[tokio::test]
    async fn test_development_adds_extended_pool() {
        let reg = registry(&[("a", true), ("b", false)], &[("x", true), ("y", true)]);
        let svc = service(reg);

        let general = svc
            .submit(OrchestrationRequest::new(prompt("p")))
            .await
            .unwrap();
        assert_eq!(general.ais_consulted, vec!["a"]);

        let dev = svc
            .submit(OrchestrationRequest::new(prompt("p")).with_mode(Mode::Development))
            .await
            .unwrap();
        assert_eq!(dev.ais_consulted, vec!["a", "x", "y"]);
    }

    #[tokio::test]
    async fn test_order_is_stable_across_calls() {
        let reg = ConnectorRegistry::new(
            vec![
                arc(FakeConnector::enabled("a").with_delay(Duration::from_millis(30))),
                arc(FakeConnector::enabled("b")),
                arc(FakeConnector::enabled("c").with_delay(Duration::from_millis(10))),
            ],
            vec![],
        );
        let svc = service(reg);

        for _ in 0..3 {
            let result = svc
                .submit(OrchestrationRequest::new(prompt("p")))
                .await
                .unwrap();
            assert_eq!(result.ais_consulted, vec!["a", "b", "c"]);
        }
    }

    #[tokio::test]
    async fn test_single_failure_does_not_reach_caller() {
        let reg = ConnectorRegistry::new(
            vec![
                arc(FakeConnector::enabled("a")),
                arc(FakeConnector::enabled("b")
                    .with_behavior(Behavior::Fail(ConnectorError::Timeout))),
            ],
            vec![],
        );

        let result = service(reg)
            .submit(OrchestrationRequest::new(prompt("p")))
            .await
            .unwrap();

        assert_eq!(result.ais_consulted.len(), 2);
        assert_eq!(result.outcomes[0].text(), "a says hello");
        assert_eq!(result.outcomes[1].text(), "Error querying b: Timeout");
        assert!(result.result.contains("Error querying b: Timeout"));
        assert_eq!(result.consensus_score, SIMULATED_CONSENSUS_SCORE);
    }

    #[tokio::test]
    async fn test_all_failures_score_zero_without_error() {
        let failing = || {
            arc(FakeConnector::enabled("f")
                .with_behavior(Behavior::Fail(ConnectorError::Other("down".to_string()))))
        };
        let reg = ConnectorRegistry::new(vec![failing(), failing()], vec![]);

        let result = service(reg)
            .submit(OrchestrationRequest::new(prompt("p")))
            .await
            .unwrap();

        assert_eq!(result.ais_consulted.len(), 2);
        assert_eq!(result.consensus_score, 0.0);
    }

    #[tokio::test]
    async fn test_validation_rejects_request() {
        let svc = service(registry(&[("a", true)], &[]));

        let err = svc.submit_raw("", None, None).await.unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::InvalidRequest(DomainError::EmptyPrompt)
        ));

        let err = svc.submit_raw("p", Some("warp"), None).await.unwrap_err();
        assert!(matches!(
            err,
            OrchestrationError::InvalidRequest(DomainError::InvalidMode(_))
        ));
    }

    struct BrokenSynthesizer;

    impl ConsensusSynthesizer for BrokenSynthesizer {
        fn synthesize(
            &self,
            _prompt: &Prompt,
            _outcomes: &[ConnectorOutcome],
        ) -> Result<Consensus, DomainError> {
            Err(DomainError::Synthesis("template missing".to_string()))
        }
    }

    #[tokio::test]
    async fn test_synthesis_defect_surfaces_as_service_failure() {
        let svc = service(registry(&[("a", true)], &[]))
            .with_synthesizer(Arc::new(BrokenSynthesizer));

        let err = svc
            .submit(OrchestrationRequest::new(prompt("p")))
            .await
            .unwrap_err();

        assert!(err.is_service_failure());
        assert!(err.to_string().contains("template missing"));
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let svc = service(registry(&[("a", true)], &[("x", true)]));

        let general = svc.submit(OrchestrationRequest::new(prompt("one")));
        let dev = svc.submit(OrchestrationRequest::new(prompt("two")).with_mode(Mode::Development));
        let (general, dev) = futures::future::join(general, dev).await;

        assert_eq!(general.unwrap().ais_consulted, vec!["a"]);
        assert_eq!(dev.unwrap().ais_consulted, vec!["a", "x"]);
    }

    #[test]
    fn test_health_and_info() {
        let svc = service(registry(&[("a", true), ("b", false)], &[("x", true)]));

        let health = svc.health();
        assert_eq!(health.enabled_core, vec!["a"]);
        assert_eq!(health.enabled_extended, vec!["x"]);
        assert_eq!(health.total_enabled, 2);

        let info = svc.info();
        assert_eq!(info.service, SERVICE_NAME);
        assert_eq!(info.status, "operational");
        assert!(!info.version.is_empty());
    }

    #[tokio::test]
    async fn test_domain_entry_points_fix_mode() {
        let svc = service(registry(&[("a", true)], &[("x", true)]));

        let sip = svc.analyze_sip_log("SIP/2.0 486 Busy Here").await.unwrap();
        assert_eq!(sip.mode, Mode::VoipAnalysis);
        assert_eq!(sip.ais_consulted, vec!["a"]);

        let predict = svc
            .predict_device_failure(&json!({"uptime_days": 400}))
            .await
            .unwrap();
        assert_eq!(predict.mode, Mode::General);

        let fix = svc
            .auto_correction(&json!({"error": "segfault"}))
            .await
            .unwrap();
        assert_eq!(fix.mode, Mode::Development);
        assert_eq!(fix.ais_consulted, vec!["a", "x"]);
    }

    struct ContextEcho;

    #[async_trait::async_trait]
    impl Connector for ContextEcho {
        fn id(&self) -> &str {
            "echo"
        }

        fn display_name(&self) -> &str {
            "Echo"
        }

        fn is_enabled(&self) -> bool {
            true
        }

        async fn call(
            &self,
            prompt: &Prompt,
            context: Option<&RequestContext>,
        ) -> Result<String, ConnectorError> {
            let ticket = context
                .and_then(|c| c.get("ticket"))
                .map(|v| v.to_string())
                .unwrap_or_else(|| "none".to_string());
            Ok(format!("{} / ticket {}", prompt, ticket))
        }
    }

    #[tokio::test]
    async fn test_context_reaches_connector() {
        let reg = ConnectorRegistry::new(vec![Arc::new(ContextEcho) as Arc<dyn Connector>], vec![]);
        let mut ctx = RequestContext::new();
        ctx.insert("ticket".to_string(), json!(42));

        let result = service(reg)
            .submit_raw("p", None, Some(ctx))
            .await
            .unwrap();
        assert_eq!(result.outcomes[0].text(), "p / ticket 42");
    }
}
