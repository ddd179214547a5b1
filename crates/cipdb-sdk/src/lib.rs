//! cipdb SDK - Conditional breakpoint gate
//!
//! High-level API for deciding whether a breakpoint should pause into a
//! debugger. A decision walks four tiers in a fixed order and the first tier
//! that decides wins:
//!
//! 1. the process-wide switch ([`enable`] / [`disable`])
//! 2. the `CIPDB` environment disable flag
//! 3. the breakpoint id against `CIPDB_ID` / `CIPDB_IDS`
//! 4. the caller's condition
//!
//! ```rust,ignore
//! // Unconditional
//! cipdb_sdk::set_trace!()?;
//!
//! // Only when the condition holds
//! cipdb_sdk::set_trace!(retries > 3)?;
//!
//! // Only when "validate" is allow-listed (or no allow-list is set)
//! cipdb_sdk::set_trace!(id = "validate")?;
//! ```

pub mod breakpoints;
pub mod builder;
pub mod config;
pub mod debugger;
pub mod decision_engine;
pub mod error;
pub mod global;
mod macros;

// Re-export main types
pub use breakpoints::Breakpoints;
pub use builder::BreakpointsBuilder;
pub use config::{GateConfig, IdPolicy};
pub use debugger::{AttachDebugger, BreakSite, Debugger, TerminalDebugger};
pub use decision_engine::DecisionEngine;
pub use error::{Result, SdkError};
pub use global::{disable, enable, install, is_enabled, post_mortem, set_trace};

// Re-export commonly used types from core
pub use cipdb_core::{
    CallRequest, Condition, Decision, EnvKeys, EnvSnapshot, EnvSource, Evaluation, GlobalState,
    IdMode, MapEnv, ProcessEnv, Tier, TierVerdict,
};
