//! Environment variable updates.
//!
//! - `source`: the [`Environment`] accessor and its process/in-memory implementations
//! - `patch`: applying operation lists and reporting an [`EnvDiff`]

pub mod patch;
pub mod source;

pub use patch::{EnvDiff, apply};
pub use source::{Environment, MemoryEnv, ProcessEnv};
