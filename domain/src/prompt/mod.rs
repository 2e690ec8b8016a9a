//! Prompt templates for the domain-specific entry points

pub mod template;

pub use template::AnalysisTemplate;
