//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`] — a validated, non-empty prompt
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod prompt;
