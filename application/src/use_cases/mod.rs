//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod orchestrate;
pub mod registry;
pub mod select_pool;

#[cfg(test)]
pub(crate) mod test_support;
