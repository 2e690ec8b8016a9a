//! Orchestration request

use super::mode::Mode;
use crate::core::{error::DomainError, prompt::Prompt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form context attached to a request (string keys, arbitrary values)
pub type RequestContext = Map<String, Value>;

/// A single request to the orchestration service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationRequest {
    pub prompt: Prompt,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
}

impl OrchestrationRequest {
    /// Create a general-mode request without context
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            mode: Mode::default(),
            context: None,
        }
    }

    /// Build a request from raw boundary input.
    ///
    /// Checks the structural constraints only: non-empty prompt and a
    /// recognised mode. A missing mode means [`Mode::General`].
    pub fn parse(
        prompt: &str,
        mode: Option<&str>,
        context: Option<RequestContext>,
    ) -> Result<Self, DomainError> {
        let prompt = Prompt::try_new(prompt)?;
        let mode = match mode {
            Some(m) => m.parse()?,
            None => Mode::default(),
        };
        Ok(Self {
            prompt,
            mode,
            context,
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Insert a single context entry, creating the context if needed
    pub fn with_context_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}
