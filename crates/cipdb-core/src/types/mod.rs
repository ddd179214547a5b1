//! Type definitions for the breakpoint gate

pub mod condition;
pub mod decision;
pub mod request;

pub use condition::Condition;
pub use decision::{Decision, Evaluation, Tier, TierVerdict};
pub use request::CallRequest;
