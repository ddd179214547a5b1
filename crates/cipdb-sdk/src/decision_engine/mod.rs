//! DecisionEngine - decides whether a breakpoint pauses
//!
//! # Architecture
//!
//! The module is organized into:
//! - `tiers`: one function per tier, each returning a `TierVerdict`
//! - `condition_evaluator`: truthiness of caller conditions
//! - `engine`: sequential composition of the tiers
//! - `tests`: Unit tests (test-only)

mod condition_evaluator;
mod engine;
mod tiers;

pub use engine::DecisionEngine;

// Tests module (only compiled in test mode)
#[cfg(test)]
mod tests;
