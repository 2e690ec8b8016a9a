//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Synthesis error: {0}")]
    Synthesis(String),
}
