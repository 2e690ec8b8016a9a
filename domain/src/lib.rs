//! Domain layer for nexus
//!
//! This crate contains the core value objects and the consensus logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Connectors and pools
//!
//! A connector is a named capability that answers a prompt. Connectors are
//! grouped into a **core** pool (always eligible) and an **extended** pool
//! (eligible only in development mode). See [`connector`].
//!
//! ## Consensus
//!
//! The outputs of every consulted connector are folded into one answer and
//! a confidence score by a [`ConsensusSynthesizer`].

pub mod config;
pub mod connector;
pub mod consensus;
pub mod core;
pub mod orchestration;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use connector::{ConnectorSpec, PoolKind};
pub use consensus::{
    Consensus, ConsensusSynthesizer, NO_CONNECTORS_MESSAGE, NarrativeConsensus,
    SIMULATED_CONSENSUS_SCORE,
};
pub use crate::core::{error::DomainError, prompt::Prompt};
pub use orchestration::{
    mode::Mode,
    request::{OrchestrationRequest, RequestContext},
    value_objects::{
        ConnectorOutcome, HealthReport, OrchestrationResult, OutcomeStatus, ServiceInfo,
    },
};
pub use prompt::AnalysisTemplate;
