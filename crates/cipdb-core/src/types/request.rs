//! Per-call breakpoint request

use super::condition::Condition;

/// What a call site asks for: an optional id and a condition
#[derive(Debug, Clone, Default)]
pub struct CallRequest {
    /// Breakpoint site identifier
    pub id: Option<String>,

    /// Caller condition, unconditional by default
    pub condition: Condition,
}

impl CallRequest {
    /// Create an unconditional request with no id
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoint id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the caller condition
    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = condition.into();
        self
    }

    /// The id, if one was given and it is not empty
    pub fn effective_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
