use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// A `KEY=VALUE` environment assignment; a bare `KEY` means `KEY=true`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub key: String,
    pub value: String,
}

impl EnvAssignment {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn parse(spec: &str) -> Result<Self> {
        let (key, value) = match spec.split_once('=') {
            Some((key, value)) => (key.trim(), value),
            None => (spec.trim(), "true"),
        };

        if key.is_empty() {
            return Err(CoreError::EmptyVariableName(spec.to_string()));
        }
        if key.contains('\0') || value.contains('\0') || key.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidAssignment(spec.to_string()));
        }

        Ok(Self::new(key, value))
    }
}

impl FromStr for EnvAssignment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for EnvAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
