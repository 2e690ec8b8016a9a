//! Console output formatter for orchestration results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use nexus_domain::{HealthReport, OrchestrationResult, OutcomeStatus, ServiceInfo};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything this formatter emits
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the complete result
    pub fn format(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Nexus Orchestration Result"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Mode:".cyan().bold(), result.mode));
        output.push_str(&format!(
            "{} {}\n",
            "Connectors:".cyan().bold(),
            Self::consulted(result)
        ));
        output.push_str(&format!(
            "{} {:.2}   {} {:.3}s\n",
            "Consensus score:".cyan().bold(),
            result.consensus_score,
            "Time:".cyan().bold(),
            result.processing_time
        ));

        if !result.outcomes.is_empty() {
            output.push_str(&Self::section_header("Connector Outcomes"));
            for outcome in &result.outcomes {
                let title = format!("── {} ({}) ──", outcome.display_name, outcome.connector);
                let title = match outcome.status {
                    OutcomeStatus::Success(_) => title.yellow().bold(),
                    OutcomeStatus::NotConfigured => title.dimmed(),
                    OutcomeStatus::Failure(_) => title.red().bold(),
                };
                output.push_str(&format!("\n{}\n{}\n", title, outcome.text()));
            }
        }

        output.push_str(&Self::section_header("Consensus"));
        output.push_str(&format!("\n{}\n", result.result));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &OrchestrationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the synthesized answer only (concise output)
    pub fn format_result_only(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Nexus Consensus ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {}  {} {:.2}\n\n",
            "Connectors consulted:".dimmed(),
            Self::consulted(result),
            "score:".dimmed(),
            result.consensus_score
        ));
        output.push_str(&result.result);
        output.push('\n');

        output
    }

    /// Format a health snapshot
    pub fn format_health(report: &HealthReport) -> String {
        let list = |ids: &[String]| {
            if ids.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                ids.join(", ")
            }
        };

        format!(
            "{} {}\n{} {}\n{} {}\n{} {}\n",
            "Status:".cyan().bold(),
            report.status.green(),
            "Core:".cyan().bold(),
            list(&report.enabled_core),
            "Extended:".cyan().bold(),
            list(&report.enabled_extended),
            "Total enabled:".cyan().bold(),
            report.total_enabled
        )
    }

    /// Format service identification
    pub fn format_info(info: &ServiceInfo) -> String {
        format!(
            "{} {} ({})\n",
            info.service.bold(),
            info.version,
            info.status.green()
        )
    }

    fn consulted(result: &OrchestrationResult) -> String {
        if result.ais_consulted.is_empty() {
            "(none)".to_string()
        } else {
            result.ais_consulted.join(", ")
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &OrchestrationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &OrchestrationResult) -> String {
        Self::format_json(result)
    }

    fn format_result_only(&self, result: &OrchestrationResult) -> String {
        Self::format_result_only(result)
    }
}
