//! Narrative consensus: quotes the first few answers and closes with a
//! fixed summary paragraph.

use super::{Consensus, ConsensusSynthesizer};
use crate::core::{error::DomainError, prompt::Prompt};
use crate::orchestration::value_objects::ConnectorOutcome;

/// Score reported whenever at least one connector answered.
///
/// There is no agreement measure behind it yet.
pub const SIMULATED_CONSENSUS_SCORE: f64 = 0.85;

const DEFAULT_MAX_EXCERPTS: usize = 3;

const CLOSING_SUMMARY: &str = "Based on the analysis of the consulted connectors, the most \
aligned and validated answer is a synthesis of the perspectives above, weighing technical \
accuracy, contextual relevance and ethical alignment.";

const FOOTER: &str = "*This answer was produced by the Nexus consensus engine.*";

/// Default [`ConsensusSynthesizer`]
#[derive(Debug, Clone)]
pub struct NarrativeConsensus {
    max_excerpts: usize,
    score: f64,
}

impl Default for NarrativeConsensus {
    fn default() -> Self {
        Self {
            max_excerpts: DEFAULT_MAX_EXCERPTS,
            score: SIMULATED_CONSENSUS_SCORE,
        }
    }
}

impl NarrativeConsensus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outcomes quoted verbatim
    pub fn with_max_excerpts(mut self, max: usize) -> Self {
        self.max_excerpts = max;
        self
    }

    /// Score reported when at least one connector answered
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    fn render(&self, prompt: &Prompt, outcomes: &[ConnectorOutcome]) -> String {
        let bullets = outcomes
            .iter()
            .take(self.max_excerpts)
            .map(|o| format!("• {}", o.text()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "## Nexus Consensus Answer\n\n\
             **Prompt analysed:** {}\n\n\
             **Integrated analysis of {} connectors:**\n\n\
             {}\n\n\
             **Final consensus:**\n{}\n\n\
             {}",
            prompt.content(),
            outcomes.len(),
            bullets,
            CLOSING_SUMMARY,
            FOOTER
        )
    }
}

impl ConsensusSynthesizer for NarrativeConsensus {
    fn synthesize(
        &self,
        prompt: &Prompt,
        outcomes: &[ConnectorOutcome],
    ) -> Result<Consensus, DomainError> {
        if outcomes.is_empty() {
            return Ok(Consensus::unavailable());
        }

        let score = if outcomes.iter().any(|o| o.is_success()) {
            self.score
        } else {
            0.0
        };

        Ok(Consensus::new(self.render(prompt, outcomes), score))
    }
}
