//! Output formatter trait

use nexus_domain::{OrchestrationResult, OutputFormat};

/// Trait for formatting orchestration results
pub trait OutputFormatter {
    /// Format the complete result, including every connector outcome
    fn format(&self, result: &OrchestrationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &OrchestrationResult) -> String;

    /// Format the synthesized answer only (concise output)
    fn format_result_only(&self, result: &OrchestrationResult) -> String;

    /// Dispatch on an [`OutputFormat`]
    fn render(&self, result: &OrchestrationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Result => self.format_result_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
