//! cipdb Core - Core types for the cipdb conditional breakpoint gate
//!
//! This crate provides the fundamental types shared by the engine and the launcher:
//! - Decision types (tiers, verdicts, evaluations)
//! - Call requests and caller conditions
//! - Process-wide enable/disable state
//! - Environment access and per-call snapshots
//! - Error types

pub mod env;
pub mod error;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use env::{EnvAssignment, EnvKeys, EnvSnapshot, EnvSource, IdMode, MapEnv, ProcessEnv};
pub use error::CoreError;
pub use state::GlobalState;
pub use types::{CallRequest, Condition, Decision, Evaluation, Tier, TierVerdict};
