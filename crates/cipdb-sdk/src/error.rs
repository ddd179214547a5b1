//! SDK error types

use thiserror::Error;

/// SDK error type
///
/// Deciding never fails; errors only come from handing control to a debugger.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The debugger could not be started or reported a failure
    #[error("Debugger error: {0}")]
    Debugger(String),

    /// I/O error while talking to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
