//! Consensus synthesis
//!
//! Folds the ordered connector outcomes of one request into a single answer
//! and a confidence score.
//!
//! Any [`ConsensusSynthesizer`] must keep the score in `[0.0, 1.0]` and
//! return `0.0` with [`NO_CONNECTORS_MESSAGE`] when there is nothing to
//! synthesize.

mod narrative;

pub use narrative::{NarrativeConsensus, SIMULATED_CONSENSUS_SCORE};

use crate::core::{error::DomainError, prompt::Prompt};
use crate::orchestration::value_objects::ConnectorOutcome;

/// Canonical answer when no connector could be consulted
pub const NO_CONNECTORS_MESSAGE: &str =
    "No connector configured or available. Configure API keys to enable connectors.";

/// A synthesized answer with its confidence score
#[derive(Debug, Clone, PartialEq)]
pub struct Consensus {
    pub text: String,
    pub score: f64,
}

impl Consensus {
    /// Create a consensus, clamping the score into `[0.0, 1.0]` (NaN becomes 0.0)
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        Self {
            text: text.into(),
            score,
        }
    }

    /// The fallback consensus for an empty outcome list
    pub fn unavailable() -> Self {
        Self::new(NO_CONNECTORS_MESSAGE, 0.0)
    }
}

/// Strategy for combining connector outcomes into one answer
pub trait ConsensusSynthesizer: Send + Sync {
    /// Synthesize the outcomes (in active-pool order) for `prompt`
    fn synthesize(
        &self,
        prompt: &Prompt,
        outcomes: &[ConnectorOutcome],
    ) -> Result<Consensus, DomainError>;
}
