//! Caller condition evaluation

use cipdb_core::env::truthy_word;
use cipdb_core::{Condition, EnvSource};
use std::panic::{catch_unwind, AssertUnwindSafe};

pub(super) struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Truthiness of a caller condition. Never panics: a panicking predicate is false.
    pub(super) fn evaluate(condition: &Condition, env: &dyn EnvSource) -> bool {
        match condition {
            Condition::Bool(value) => *value,
            Condition::EnvTruthy(name) => env.var(name).is_some_and(|value| truthy_word(&value)),
            Condition::EnvEquals { name, value } => {
                env.var(name).is_some_and(|actual| actual == *value)
            }
            Condition::Predicate(predicate) => {
                match catch_unwind(AssertUnwindSafe(|| (**predicate)())) {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!("Breakpoint predicate panicked, treating it as false");
                        false
                    }
                }
            }
        }
    }
}
