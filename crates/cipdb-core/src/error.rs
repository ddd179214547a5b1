//! Error types for cipdb Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid environment assignment: {0}")]
    InvalidAssignment(String),

    #[error("Empty environment variable name in: {0}")]
    EmptyVariableName(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
