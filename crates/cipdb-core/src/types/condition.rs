//! Caller-supplied breakpoint conditions
//!
//! A condition is the boolean-like value passed at a breakpoint site. Besides
//! plain booleans, a condition can look at the environment or defer to a
//! closure:
//!
//! ```text
//! true / false        plain boolean
//! "DEBUG"             DEBUG is set to a truthy word (true, 1, yes, on)
//! "ENV=production"    ENV equals "production" exactly
//! || count > 10       predicate, evaluated only when the condition tier runs
//! ```

use std::fmt;
use std::sync::Arc;

/// Boxed predicate used by [`Condition::Predicate`]
pub type PredicateFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Caller condition for a breakpoint
#[derive(Clone)]
pub enum Condition {
    /// Plain boolean
    Bool(bool),

    /// Environment variable holds a truthy word
    EnvTruthy(String),

    /// Environment variable equals a value exactly
    EnvEquals { name: String, value: String },

    /// Closure evaluated lazily; a panic counts as `false`
    Predicate(PredicateFn),
}

impl Condition {
    /// Wrap a closure as a condition
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition::Predicate(Arc::new(f))
    }

    /// Parse an environment condition: `NAME=value` or `NAME`
    pub fn parse_env(spec: &str) -> Self {
        match spec.split_once('=') {
            Some((name, value)) => Condition::EnvEquals {
                name: name.to_string(),
                value: value.to_string(),
            },
            None => Condition::EnvTruthy(spec.to_string()),
        }
    }

    /// Short label for logs
    pub fn describe(&self) -> String {
        match self {
            Condition::Bool(value) => value.to_string(),
            Condition::EnvTruthy(name) => format!("env({})", name),
            Condition::EnvEquals { name, value } => format!("env({}) == {:?}", name, value),
            Condition::Predicate(_) => "predicate".to_string(),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Bool(true)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Condition::EnvTruthy(name) => f.debug_tuple("EnvTruthy").field(name).finish(),
            Condition::EnvEquals { name, value } => f
                .debug_struct("EnvEquals")
                .field("name", name)
                .field("value", value)
                .finish(),
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Bool(value)
    }
}

/// `None` means "no condition given", which is unconditional
impl From<Option<bool>> for Condition {
    fn from(value: Option<bool>) -> Self {
        Condition::Bool(value.unwrap_or(true))
    }
}

impl From<&str> for Condition {
    fn from(spec: &str) -> Self {
        Condition::parse_env(spec)
    }
}

impl From<String> for Condition {
    fn from(spec: String) -> Self {
        Condition::parse_env(&spec)
    }
}

impl From<&String> for Condition {
    fn from(spec: &String) -> Self {
        Condition::parse_env(spec)
    }
}
