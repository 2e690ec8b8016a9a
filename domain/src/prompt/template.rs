//! Instruction templates for log analysis, failure prediction and
//! auto-correction requests.
//!
//! Each builder fixes the mode and the `analysis_type` context entry and
//! wraps the caller's payload in a fixed instruction.

use crate::core::{error::DomainError, prompt::Prompt};
use crate::orchestration::{mode::Mode, request::OrchestrationRequest};
use serde_json::Value;

/// Context key recording which analysis produced a request
pub const ANALYSIS_TYPE_KEY: &str = "analysis_type";

/// Templates for the domain convenience operations
pub struct AnalysisTemplate;

impl AnalysisTemplate {
    /// Instruction for SIP log diagnosis
    pub fn sip_log(log: &str) -> String {
        format!(
            "Analyze this SIP log and provide a detailed diagnosis:\n\n{}",
            log
        )
    }

    /// Instruction for predictive maintenance on device data
    pub fn device_failure(device_data: &Value) -> String {
        format!(
            "Analyze the device data and predict possible failures:\n\n{}",
            Self::pretty(device_data)
        )
    }

    /// Instruction for generating a fix for a system error
    pub fn auto_correction(error_data: &Value) -> String {
        format!(
            "Analyze this system error and generate corrective code:\n\n{}",
            Self::pretty(error_data)
        )
    }

    /// SIP log analysis request (`voip_analysis` mode)
    pub fn sip_log_request(log: &str) -> Result<OrchestrationRequest, DomainError> {
        Self::build(Self::sip_log(log), Mode::VoipAnalysis, "sip_log")
    }

    /// Device failure prediction request (`general` mode)
    pub fn device_failure_request(
        device_data: &Value,
    ) -> Result<OrchestrationRequest, DomainError> {
        Self::build(
            Self::device_failure(device_data),
            Mode::General,
            "predictive_maintenance",
        )
    }

    /// Auto-correction request (`development` mode)
    pub fn auto_correction_request(
        error_data: &Value,
    ) -> Result<OrchestrationRequest, DomainError> {
        Self::build(
            Self::auto_correction(error_data),
            Mode::Development,
            "auto_correction",
        )
    }

    fn build(
        prompt: String,
        mode: Mode,
        analysis_type: &str,
    ) -> Result<OrchestrationRequest, DomainError> {
        Ok(OrchestrationRequest::new(Prompt::try_new(prompt)?)
            .with_mode(mode)
            .with_context_entry(ANALYSIS_TYPE_KEY, analysis_type))
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }
}
