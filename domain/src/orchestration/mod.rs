//! Orchestration domain
//!
//! Request and result types for fanning one prompt out to many connectors.

pub mod mode;
pub mod request;
pub mod value_objects;
