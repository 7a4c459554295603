//! The single failure mode of the translation core.

use thiserror::Error;

/// Any rule violation found while translating a play. Carries a
/// human-readable description; translation stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompilationError {
    message: String,
}

impl CompilationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
